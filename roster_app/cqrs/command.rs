use async_trait::async_trait;
use roster_types::errors::{PlayerError, StoreError};

use crate::uow::UnitOfWork;

/// A trait for Command structs.
/// Commands are operations that change the state of the system.
pub trait Command: Send + Sync {
    /// The data type that this command will return once committed.
    type Output: Send + Sync;

    /// The write this command performs, used to wrap store failures.
    fn write(&self) -> StoreWrite;
}

/// A trait for handlers that execute Commands.
/// It receives the command and a Unit of Work (&Box<dyn UnitOfWork...>) to use.
/// It should NOT manage the transaction lifecycle (commit/rollback);
/// that is the job of the AppBus.
#[async_trait]
pub trait CommandHandler<C: Command> {
    async fn handle(
        &self,
        cmd: C,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
    ) -> Result<C::Output, PlayerError>;
}

/// Kind of write a command performs against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreWrite {
    Create,
    Update(i32),
    Delete(i32),
}

impl StoreWrite {
    /// Wraps a store failure into the matching business error.
    pub fn failed(self, err: StoreError) -> PlayerError {
        tracing::error!(write = ?self, error = %err, "Store rejected write");

        match (self, err) {
            (StoreWrite::Create, StoreError::DuplicateId(id)) => PlayerError::AlreadyExists(id),
            (StoreWrite::Create, err) => PlayerError::creation_failed(err),
            (StoreWrite::Update(id), err) => PlayerError::update_failed(id, err),
            (StoreWrite::Delete(id), err) => PlayerError::deletion_failed(id, err),
        }
    }
}
