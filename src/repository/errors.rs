use thiserror::Error;

/// Result type returned by repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No connection could be checked out of the pool.
    #[error("failed to get a database connection: {0}")]
    Pool(#[from] r2d2::Error),
    /// The query itself failed.
    #[error("database query failed: {0}")]
    Query(#[from] diesel::result::Error),
    /// A stored amount could not be parsed back into a decimal.
    #[error("stored amount is not a valid decimal: {0}")]
    InvalidAmount(#[from] rust_decimal::Error),
}
