//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod enrollment_repo;
pub mod progress_repo;

pub use enrollment_repo::EnrollmentRepo;
pub use progress_repo::ProgressRepo;
