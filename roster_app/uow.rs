use std::sync::Arc;

use roster_types::errors::StoreError;

use crate::repository::PlayerRepository;

/// A Unit of Work (UoW) works as a provider for repositories
/// that all operate within a single transaction.
///
/// Implementations must give each UoW exclusive access to the roster until it
/// is committed or rolled back, so read-modify-write sequences stay atomic.
#[async_trait::async_trait]
pub trait UnitOfWork<'a>: Send + Sync {
    fn players(&self) -> Arc<dyn PlayerRepository + 'a>;

    // Consume self to ensure the UoW is not used after commit/rollback
    async fn commit(self: Box<Self>) -> Result<(), StoreError>;
    async fn rollback(self: Box<Self>) -> Result<(), StoreError>;
}

/// A factory for creating Unit of Work instances.
#[async_trait::async_trait]
pub trait UnitOfWorkProvider: Send + Sync {
    /// Begin a new Unit of Work (transaction).
    async fn tx<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, StoreError>;
}
