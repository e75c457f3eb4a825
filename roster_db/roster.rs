use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use roster_types::{errors::StoreError, player::Player};

/// The persisted roster document: `{ "players": [...] }`.
///
/// Players keep insertion order; replacements happen in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Roster {
    /// Builds a roster, rejecting documents where two players share an id.
    pub fn new(players: Vec<Player>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(players.len());
        for player in &players {
            if !seen.insert(player.id) {
                return Err(StoreError::DuplicateId(player.id));
            }
        }
        Ok(Self { players })
    }

    pub fn find(&self, player_id: i32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Highest stored id plus one, or 1 for an empty roster.
    pub fn next_id(&self) -> Result<i32, StoreError> {
        match self.players.iter().map(|p| p.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| StoreError::Unavailable("player id space exhausted".to_string())),
        }
    }

    /// Appends `player` under the next id and returns the stored record.
    pub fn insert(&mut self, player: &Player) -> Result<Player, StoreError> {
        let stored = player.clone().with_id(self.next_id()?);
        self.players.push(stored.clone());
        Ok(stored)
    }

    pub fn replace(&mut self, player_id: i32, player: &Player) -> Result<Player, StoreError> {
        let slot = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(StoreError::PlayerNotFound(player_id))?;

        *slot = player.clone().with_id(player_id);
        Ok(slot.clone())
    }

    pub fn remove(&mut self, player_id: i32) -> Result<Player, StoreError> {
        let position = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(StoreError::PlayerNotFound(player_id))?;

        Ok(self.players.remove(position))
    }
}
