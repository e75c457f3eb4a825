use roster_types::{Result, errors::PlayerError};

use crate::{
    cqrs::{CommandHandler, StoreWrite, commands::DeletePlayer},
    uow::UnitOfWork,
};

pub struct DeletePlayerCommandHandler {}

impl Default for DeletePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeletePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeletePlayer> for DeletePlayerCommandHandler {
    async fn handle(
        &self,
        command: DeletePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
    ) -> Result<()> {
        let id = command.id;
        let repo = uow.players();

        if repo
            .get_by_id(id)
            .await
            .map_err(|e| StoreWrite::Delete(id).failed(e))?
            .is_none()
        {
            tracing::warn!(player_id = id, "Deletion of unknown player");
            return Err(PlayerError::NotFound(id));
        }

        repo.remove(id)
            .await
            .map_err(|e| StoreWrite::Delete(id).failed(e))?;

        tracing::info!(player_id = id, "Player deleted");
        Ok(())
    }
}
