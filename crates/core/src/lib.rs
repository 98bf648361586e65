//! Domain types shared by the storage, notification and API crates.

pub mod enrollment;
pub mod error;
pub mod guard;
pub mod progress;
pub mod types;
