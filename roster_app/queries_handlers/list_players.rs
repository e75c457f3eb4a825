use async_trait::async_trait;

use roster_types::{Result, errors::PlayerError, player::Player};

use crate::{
    cqrs::{Query, QueryHandler, queries::ListPlayers},
    uow::UnitOfWork,
};

pub struct ListPlayersQueryHandler {}

impl Default for ListPlayersQueryHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ListPlayersQueryHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListPlayers> for ListPlayersQueryHandler {
    async fn handle(
        &self,
        query: ListPlayers,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
    ) -> Result<Vec<Player>> {
        let mut players = uow.players().list_all().await.map_err(|e| {
            tracing::error!(error = %e, "Unable to list players");
            query.unavailable(&e)
        })?;

        if players.is_empty() {
            return Err(PlayerError::NoPlayers);
        }

        // Stable: equal ranks keep store order.
        players.sort_by_key(|p| p.data.rank);
        Ok(players)
    }
}
