use thiserror::Error;

/// Failures reported by a [`crate::TransactionalExecutor`].
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The database rejected a call or the connection failed.
    #[error("database error: {0}")]
    Database(String),
    /// A statement, commit or rollback was issued with no open transaction.
    #[error("no open transaction")]
    NoTransaction,
    /// A transaction was already open when `begin` was called.
    #[error("transaction already open")]
    AlreadyOpen,
}

/// Convenience alias for executor results.
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;
