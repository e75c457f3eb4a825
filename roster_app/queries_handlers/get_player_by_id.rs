use async_trait::async_trait;

use roster_types::{Result, errors::PlayerError, player::Player};

use crate::{
    cqrs::{Query, QueryHandler, queries::GetPlayerById},
    uow::UnitOfWork,
};

pub struct GetPlayerByIdQueryHandler {}

impl Default for GetPlayerByIdQueryHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GetPlayerByIdQueryHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetPlayerById> for GetPlayerByIdQueryHandler {
    async fn handle(
        &self,
        query: GetPlayerById,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
    ) -> Result<Player> {
        let player = uow.players().get_by_id(query.id).await.map_err(|e| {
            tracing::error!(player_id = query.id, error = %e, "Unable to read player");
            query.unavailable(&e)
        })?;

        player.ok_or(PlayerError::NotFound(query.id))
    }
}
