use roster_types::{
    errors::{PlayerError, StoreError},
    player::{Player, Statistics},
};

use crate::cqrs::Query;

/// List every player ordered by rank.
pub struct ListPlayers;

impl Query for ListPlayers {
    type Output = Vec<Player>;

    fn unavailable(&self, _err: &StoreError) -> PlayerError {
        PlayerError::NoPlayers
    }
}

/// Fetch a player by id.
pub struct GetPlayerById {
    pub id: i32,
}

impl Query for GetPlayerById {
    type Output = Player;

    fn unavailable(&self, _err: &StoreError) -> PlayerError {
        PlayerError::NotFound(self.id)
    }
}

/// Compute roster-wide statistics.
pub struct GetStatistics;

impl Query for GetStatistics {
    type Output = Statistics;

    /// Not tied to a single player, so the failure carries id 0.
    fn unavailable(&self, err: &StoreError) -> PlayerError {
        PlayerError::update_failed(0, err)
    }
}
