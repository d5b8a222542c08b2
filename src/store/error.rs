use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Schema migration failed.
    #[error("migration failed: {0}")]
    Migration(String),

    /// A create raced another create of the same natural key and the
    /// recovery re-read also came up empty. Should not escape the store.
    #[error("conflict on {entity} could not be recovered")]
    UnrecoveredConflict {
        /// Entity table name.
        entity: &'static str,
    },

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

/// Convenience result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Whether `err` is a uniqueness-constraint violation, the signal for the
/// create-or-recover path to re-read the existing row.
pub(crate) fn is_unique_violation(err: &libsql::Error) -> bool {
    err.to_string().contains("UNIQUE constraint failed")
}
