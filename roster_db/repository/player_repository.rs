use std::sync::Arc;
use tokio::sync::Mutex;

use roster_app::repository::PlayerRepository;
use roster_types::{errors::StoreError, player::Player};

use crate::roster::Roster;

/// Implements PlayerRepository and operates on a unit of work's working copy.
#[derive(Clone)]
pub struct RosterPlayerRepository {
    roster: Arc<Mutex<Roster>>,
}

impl RosterPlayerRepository {
    pub fn new(roster: Arc<Mutex<Roster>>) -> Self {
        Self { roster }
    }
}

#[async_trait::async_trait]
impl PlayerRepository for RosterPlayerRepository {
    async fn list_all(&self) -> Result<Vec<Player>, StoreError> {
        let roster = self.roster.lock().await;
        Ok(roster.players.clone())
    }

    async fn get_by_id(&self, player_id: i32) -> Result<Option<Player>, StoreError> {
        let roster = self.roster.lock().await;
        Ok(roster.find(player_id).cloned())
    }

    async fn insert(&self, player: &Player) -> Result<Player, StoreError> {
        let mut roster = self.roster.lock().await;
        let stored = roster.insert(player)?;
        tracing::debug!(player_id = stored.id, "Inserted player");
        Ok(stored)
    }

    async fn replace(&self, player_id: i32, player: &Player) -> Result<Player, StoreError> {
        let mut roster = self.roster.lock().await;
        roster.replace(player_id, player)
    }

    async fn remove(&self, player_id: i32) -> Result<(), StoreError> {
        let mut roster = self.roster.lock().await;
        roster.remove(player_id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use roster_app::test_utils::tests::{PlayerFactoryOptions, player_factory, sample_roster};

    use super::*;

    fn repository() -> RosterPlayerRepository {
        let roster = Roster::new(sample_roster()).unwrap();
        RosterPlayerRepository::new(Arc::new(Mutex::new(roster)))
    }

    #[tokio::test]
    async fn test_list_all_keeps_store_order() -> Result<(), StoreError> {
        let repo = repository();

        let ids: Vec<i32> = repo.list_all().await?.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![17, 52, 95]);
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() -> Result<(), StoreError> {
        let repo = RosterPlayerRepository::new(Arc::new(Mutex::new(Roster::default())));

        assert!(repo.list_all().await?.is_empty());
        assert_eq!(repo.get_by_id(1).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_write_operations_round_through_roster() -> Result<(), StoreError> {
        let repo = repository();

        let added = repo
            .insert(&player_factory(PlayerFactoryOptions {
                first_name: Some("Carlos"),
                last_name: Some("Alcaraz"),
                ..Default::default()
            }))
            .await?;
        assert_eq!(added.id, 96);

        let replaced = repo
            .replace(96, &player_factory(PlayerFactoryOptions::default()))
            .await?;
        assert_eq!(replaced.id, 96);
        assert_eq!(replaced.last_name, "Federer");

        repo.remove(96).await?;
        assert_eq!(repo.get_by_id(96).await?, None);
        assert!(matches!(
            repo.remove(96).await,
            Err(StoreError::PlayerNotFound(96))
        ));
        Ok(())
    }
}
