use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod prices;

/// Result type returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request parameters failed validation; raised before any store access
    /// and never wrapping a downstream error.
    #[error("invalid price query: {0}")]
    InvalidQuery(String),
    /// No price window contains the requested instant.
    #[error("no applicable price for the given parameters")]
    NotFound,
    /// The price store failed; propagated unchanged, never retried.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
