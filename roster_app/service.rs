use std::sync::Arc;

use roster_types::{
    Result,
    player::{Player, Statistics},
};

use crate::{
    app::AppBus,
    command_handlers::{
        AddPlayerCommandHandler, DeletePlayerCommandHandler, UpdatePlayerCommandHandler,
    },
    cqrs::{
        commands::{AddPlayer, DeletePlayer, UpdatePlayer},
        queries::{GetPlayerById, GetStatistics, ListPlayers},
    },
    queries_handlers::{
        GetPlayerByIdQueryHandler, GetStatisticsQueryHandler, ListPlayersQueryHandler,
    },
    uow::UnitOfWorkProvider,
};

/// Player domain service: one method per roster operation, each running in
/// its own unit of work through the [`AppBus`].
#[derive(Clone)]
pub struct PlayerService {
    bus: Arc<AppBus>,
}

impl PlayerService {
    pub fn new(uow_provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            bus: Arc::new(AppBus::new(uow_provider)),
        }
    }

    /// All players ordered by rank. An empty roster is reported as `NoPlayers`.
    pub async fn list_players(&self) -> Result<Vec<Player>> {
        self.bus
            .query(ListPlayers, ListPlayersQueryHandler::new())
            .await
    }

    pub async fn get_player_by_id(&self, id: i32) -> Result<Player> {
        self.bus
            .query(GetPlayerById { id }, GetPlayerByIdQueryHandler::new())
            .await
    }

    /// Stores a new player under a store-assigned id and returns it.
    pub async fn add_player(&self, player: Player) -> Result<Player> {
        self.bus
            .execute(AddPlayer { player }, AddPlayerCommandHandler::new())
            .await
    }

    pub async fn update_player(&self, id: i32, player: Player) -> Result<Player> {
        self.bus
            .execute(UpdatePlayer { id, player }, UpdatePlayerCommandHandler::new())
            .await
    }

    pub async fn delete_player(&self, id: i32) -> Result<()> {
        self.bus
            .execute(DeletePlayer { id }, DeletePlayerCommandHandler::new())
            .await
    }

    pub async fn statistics(&self) -> Result<Statistics> {
        self.bus
            .query(GetStatistics, GetStatisticsQueryHandler::new())
            .await
    }
}
