//! Row projections read by the repositories.
//!
//! Each struct is a `FromRow` + `Serialize` projection of one table, limited
//! to the columns the lookups need.

pub mod enrollment;
pub mod progress;
