pub mod notifications;
pub mod students;
