use std::sync::Arc;

use roster_types::Result;

use crate::{
    cqrs::{Command, CommandHandler, Query, QueryHandler},
    uow::UnitOfWorkProvider,
};

/// AppBus (Mediator)
/// This struct is the central entry point for all application logic.
/// It does not contain any business logic itself.
/// Its primary roles are:
/// 1. Managing Unit of Work (transaction) lifecycles.
/// 2. Dispatching Commands and Queries to their respective handlers.
pub struct AppBus {
    uow_provider: Arc<dyn UnitOfWorkProvider>,
}

impl AppBus {
    pub fn new(uow_provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self { uow_provider }
    }

    /// Executes a command.
    /// A command is an operation that modifies the system state.
    /// This method manages the transaction:
    /// - It begins a Unit of Work.
    /// - It passes the UoW to the handler.
    /// - If the handler succeeds, it commits the UoW.
    /// - If the handler fails, it rolls back the UoW.
    ///
    /// Store failures while opening or committing are wrapped according to
    /// the command's [`StoreWrite`](crate::cqrs::StoreWrite).
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<C::Output>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let write = cmd.write();
        let uow = self.uow_provider.tx().await.map_err(|e| write.failed(e))?;

        match handler.handle(cmd, &uow).await {
            Ok(output) => {
                uow.commit().await.map_err(|e| write.failed(e))?;
                Ok(output)
            }
            Err(e) => {
                if let Err(rollback_err) = uow.rollback().await {
                    tracing::error!(error = %rollback_err, "Rollback failed");
                }
                Err(e)
            }
        }
    }

    /// Executes a query.
    /// A query is an operation that reads system state and returns data.
    /// It should *never* modify the state.
    /// This method ensures the transaction is *always* rolled back.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let uow = match self.uow_provider.tx().await {
            Ok(uow) => uow,
            Err(e) => {
                tracing::error!(error = %e, "Unable to open the roster for reading");
                return Err(query.unavailable(&e));
            }
        };

        let result = handler.handle(query, &uow).await;

        // Always rollback a query, as it should never write data.
        if let Err(e) = uow.rollback().await {
            tracing::warn!(error = %e, "Rollback after query failed");
        }

        result
    }
}
