/// Failure to read from the backing store.
///
/// Lookups never translate "no rows" into an error; anything surfaced here
/// is a genuine access failure and is propagated to the caller untouched.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query against Postgres failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A write broke a schema rule (unique key, check constraint).
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The store could not be reached or refused the read.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
