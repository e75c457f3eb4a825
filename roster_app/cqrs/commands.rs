use roster_types::player::Player;

use crate::cqrs::{Command, StoreWrite};

/// Adds a player to the roster. The store assigns the id.
#[derive(Debug, Clone)]
pub struct AddPlayer {
    pub player: Player,
}

impl Command for AddPlayer {
    type Output = Player;

    fn write(&self) -> StoreWrite {
        StoreWrite::Create
    }
}

/// Replaces the whole record of an existing player.
#[derive(Debug, Clone)]
pub struct UpdatePlayer {
    pub id: i32,
    pub player: Player,
}

impl Command for UpdatePlayer {
    type Output = Player;

    fn write(&self) -> StoreWrite {
        StoreWrite::Update(self.id)
    }
}

/// Removes a player from the roster.
#[derive(Debug, Clone)]
pub struct DeletePlayer {
    pub id: i32,
}

impl Command for DeletePlayer {
    type Output = ();

    fn write(&self) -> StoreWrite {
        StoreWrite::Delete(self.id)
    }
}
