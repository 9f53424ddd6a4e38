use crate::db::{DbConnection, DbPool};
use crate::domain::price::{NewPrice, Price, PriceQuery};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod price;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over price records.
pub trait PriceReader {
    /// Every record whose validity window contains the queried instant and
    /// whose product and brand match exactly. The window is inclusive on
    /// both ends. Unordered; may be empty; no candidate is dropped.
    fn list_applicable_prices(&self, query: PriceQuery) -> RepositoryResult<Vec<Price>>;

    /// Total number of stored price records.
    fn count_prices(&self) -> RepositoryResult<i64>;
}

/// Write operations over price records. Stored records are never updated or
/// deleted; inserts exist for the startup seed and for tests.
pub trait PriceWriter {
    fn create_prices(&self, new_prices: &[NewPrice]) -> RepositoryResult<Vec<Price>>;
}
