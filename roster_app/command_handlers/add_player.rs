use roster_types::{Result, errors::PlayerError, player::Player};

use crate::{
    cqrs::{CommandHandler, StoreWrite, commands::AddPlayer},
    uow::UnitOfWork,
};

pub struct AddPlayerCommandHandler {}

impl Default for AddPlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AddPlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<AddPlayer> for AddPlayerCommandHandler {
    async fn handle(
        &self,
        command: AddPlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
    ) -> Result<Player> {
        command
            .player
            .validate()
            .map_err(PlayerError::creation_failed)?;

        if command.player.id != 0 {
            tracing::debug!(
                requested_id = command.player.id,
                "Ignoring caller-supplied player id"
            );
        }

        let player = uow
            .players()
            .insert(&command.player)
            .await
            .map_err(|e| StoreWrite::Create.failed(e))?;

        tracing::info!(player_id = player.id, "Player added");
        Ok(player)
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
    async fn test_add_player_assigns_next_id() -> Result<()> {
        let repo = MockPlayerRepository::with_players(sample_roster());
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new(repo.clone()));
        let handler = AddPlayerCommandHandler::new();

        let command = AddPlayer {
            player: player_factory(PlayerFactoryOptions {
                id: Some(3),
                first_name: Some("Serena"),
                last_name: Some("Williams"),
                ..Default::default()
            }),
        };

        let added = handler.handle(command, &uow).await?;

        assert_eq!(added.id, 96);
        assert_eq!(added.first_name, "Serena");
        assert_eq!(repo.snapshot().len(), 4);
        assert_eq!(uow.players().get_by_id(96).await.unwrap(), Some(added));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_player_on_empty_store_gets_id_one() -> Result<()> {
        let uow: Box<dyn UnitOfWork<'_> + '_> =
            Box::new(MockUnitOfWork::new(MockPlayerRepository::new()));
        let handler = AddPlayerCommandHandler::new();

        let added = handler
            .handle(
                AddPlayer {
                    player: player_factory(PlayerFactoryOptions::default()),
                },
                &uow,
            )
            .await?;

        assert_eq!(added.id, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_add_player_rejects_invalid_payload() {
        let repo = MockPlayerRepository::new();
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new(repo.clone()));
        let handler = AddPlayerCommandHandler::new();

        let result = handler
            .handle(
                AddPlayer {
                    player: player_factory(PlayerFactoryOptions {
                        last_name: Some(""),
                        ..Default::default()
                    }),
                },
                &uow,
            )
            .await;

        assert_eq!(
            result.unwrap_err(),
            PlayerError::creation_failed("last name must not be empty")
        );
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_add_player_wraps_store_failure() {
        let repo = MockPlayerRepository::new();
        repo.fail(StoreFailures {
            writes: true,
            ..Default::default()
        });
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new(repo));
        let handler = AddPlayerCommandHandler::new();

        let err = handler
            .handle(
                AddPlayer {
                    player: player_factory(PlayerFactoryOptions::default()),
                },
                &uow,
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            PlayerError::creation_failed("Store unavailable: write failure")
        );
    }
}
