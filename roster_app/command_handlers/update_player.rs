use roster_types::{Result, errors::PlayerError, player::Player};

use crate::{
    cqrs::{CommandHandler, StoreWrite, commands::UpdatePlayer},
    uow::UnitOfWork,
};

pub struct UpdatePlayerCommandHandler {}

impl Default for UpdatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdatePlayer> for UpdatePlayerCommandHandler {
    async fn handle(
        &self,
        command: UpdatePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
    ) -> Result<Player> {
        let id = command.id;
        let repo = uow.players();

        if repo
            .get_by_id(id)
            .await
            .map_err(|e| StoreWrite::Update(id).failed(e))?
            .is_none()
        {
            tracing::warn!(player_id = id, "Update of unknown player");
            return Err(PlayerError::NotFound(id));
        }

        command
            .player
            .validate()
            .map_err(|reason| PlayerError::update_failed(id, reason))?;

        let updated = repo
            .replace(id, &command.player.with_id(id))
            .await
            .map_err(|e| StoreWrite::Update(id).failed(e))?;

        tracing::info!(player_id = id, "Player updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use roster_types::Result;

    use super::*;
    use crate::test_utils::tests::{
        MockPlayerRepository, MockUnitOfWork, PlayerFactoryOptions, StoreFailures,
        player_factory, sample_roster,
    };

    #[tokio::test]
    async fn test_update_player_pins_target_id() -> Result<()> {
        let repo = MockPlayerRepository::with_players(sample_roster());
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new(repo.clone()));
        let handler = UpdatePlayerCommandHandler::new();

        let command = UpdatePlayer {
            id: 52,
            player: player_factory(PlayerFactoryOptions {
                id: Some(999),
                first_name: Some("Nole"),
                last_name: Some("Djokovic"),
                country_code: Some("SRB"),
                rank: Some(1),
                ..Default::default()
            }),
        };

        let updated = handler.handle(command, &uow).await?;

        assert_eq!(updated.id, 52);
        assert_eq!(updated.first_name, "Nole");

        let players = repo.snapshot();
        assert_eq!(players.len(), 3);
        // Replaced in place, no record under the payload id.
        assert_eq!(players[1], updated);
        assert!(players.iter().all(|p| p.id != 999));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_player_is_not_found() {
        let repo = MockPlayerRepository::with_players(sample_roster());
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new(repo.clone()));
        let handler = UpdatePlayerCommandHandler::new();

        let err = handler
            .handle(
                UpdatePlayer {
                    id: 4,
                    player: player_factory(PlayerFactoryOptions::default()),
                },
                &uow,
            )
            .await
            .unwrap_err();

        assert_eq!(err, PlayerError::NotFound(4));
        assert_eq!(repo.snapshot(), sample_roster());
    }

    #[tokio::test]
    async fn test_update_player_rejects_invalid_payload() {
        let repo = MockPlayerRepository::with_players(sample_roster());
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new(repo));
        let handler = UpdatePlayerCommandHandler::new();

        let err = handler
            .handle(
                UpdatePlayer {
                    id: 17,
                    player: player_factory(PlayerFactoryOptions {
                        country_code: Some(" "),
                        ..Default::default()
                    }),
                },
                &uow,
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            PlayerError::update_failed(17, "country code must not be empty")
        );
    }

    #[tokio::test]
    async fn test_update_player_wraps_store_failure() {
        let repo = MockPlayerRepository::with_players(sample_roster());
        repo.fail(StoreFailures {
            writes: true,
            ..Default::default()
        });
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new(repo));
        let handler = UpdatePlayerCommandHandler::new();

        let err = handler
            .handle(
                UpdatePlayer {
                    id: 17,
                    player: player_factory(PlayerFactoryOptions::default()),
                },
                &uow,
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            PlayerError::update_failed(17, "Store unavailable: write failure")
        );
    }
}
