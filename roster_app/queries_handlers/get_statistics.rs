use async_trait::async_trait;

use roster_types::{Result, player::Statistics};

use crate::{
    cqrs::{Query, QueryHandler, queries::GetStatistics},
    statistics,
    uow::UnitOfWork,
};

pub struct GetStatisticsQueryHandler {}

impl Default for GetStatisticsQueryHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GetStatisticsQueryHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetStatistics> for GetStatisticsQueryHandler {
    async fn handle(
        &self,
        query: GetStatistics,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
    ) -> Result<Statistics> {
        let players = uow.players().list_all().await.map_err(|e| {
            tracing::error!(error = %e, "Unable to load roster for statistics");
            query.unavailable(&e)
        })?;

        let stats = statistics::compute(&players)?;
        tracing::debug!(
            players = players.len(),
            best_country = %stats.best_country,
            "Statistics computed"
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use roster_types::errors::PlayerError;

    use super::*;
    use crate::test_utils::tests::{
        MockPlayerRepository, MockUnitOfWork, PlayerFactoryOptions, StoreFailures,
        player_factory, sample_roster,
    };

    #[tokio::test]
    async fn test_statistics_over_sample_roster() -> Result<()> {
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new(
            MockPlayerRepository::with_players(sample_roster()),
        ));

        let stats = GetStatisticsQueryHandler::new()
            .handle(GetStatistics, &uow)
            .await?;

        assert_eq!(stats.best_country, "SRB");
        assert_eq!(stats.median_height, 185.0);
        assert!(stats.average_bmi > 20.0 && stats.average_bmi < 26.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_statistics_on_empty_roster_fails() {
        let uow: Box<dyn UnitOfWork<'_> + '_> =
            Box::new(MockUnitOfWork::new(MockPlayerRepository::new()));

        let err = GetStatisticsQueryHandler::new()
            .handle(GetStatistics, &uow)
            .await
            .unwrap_err();

        assert_eq!(err, PlayerError::NoPlayers);
    }

    #[tokio::test]
    async fn test_statistics_flag_invalid_height() {
        let mut roster = sample_roster();
        roster.push(player_factory(PlayerFactoryOptions {
            id: Some(120),
            height: Some(0),
            ..Default::default()
        }));
        let uow: Box<dyn UnitOfWork<'_> + '_> =
            Box::new(MockUnitOfWork::new(MockPlayerRepository::with_players(roster)));

        let err = GetStatisticsQueryHandler::new()
            .handle(GetStatistics, &uow)
            .await
            .unwrap_err();

        assert_eq!(err, PlayerError::update_failed(120, "invalid height for BMI"));
    }

    #[tokio::test]
    async fn test_statistics_read_failure_keeps_reason() {
        let repo = MockPlayerRepository::with_players(sample_roster());
        repo.fail(StoreFailures {
            reads: true,
            ..Default::default()
        });
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new(repo));

        let err = GetStatisticsQueryHandler::default()
            .handle(GetStatistics, &uow)
            .await
            .unwrap_err();

        assert_eq!(err, PlayerError::update_failed(0, "Store unavailable: read failure"));
        assert_eq!(err.player_id(), Some(0));
    }
}
