use roster_types::{errors::StoreError, player::Player};

/// Record store contract for the player roster.
#[async_trait::async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Returns every player in store order. An empty roster is not an error.
    async fn list_all(&self) -> Result<Vec<Player>, StoreError>;

    /// Returns a player by id, `None` if absent.
    async fn get_by_id(&self, player_id: i32) -> Result<Option<Player>, StoreError>;

    /// Persists a new player under a freshly assigned id and returns the stored record.
    /// The id carried by `player` is ignored.
    async fn insert(&self, player: &Player) -> Result<Player, StoreError>;

    /// Replaces the whole record stored under `player_id`.
    async fn replace(&self, player_id: i32, player: &Player) -> Result<Player, StoreError>;

    /// Removes a player. Fails with `StoreError::PlayerNotFound` if absent.
    async fn remove(&self, player_id: i32) -> Result<(), StoreError>;
}
