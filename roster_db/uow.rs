use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use roster_app::{
    repository::PlayerRepository,
    uow::{UnitOfWork, UnitOfWorkProvider},
};
use roster_types::errors::StoreError;

use crate::{RosterFile, repository::RosterPlayerRepository, roster::Roster};

/// Unit of work over the roster.
///
/// Holds the provider's lock for its whole lifetime, so units of work run one
/// at a time. Repositories write to a working copy that only replaces the
/// committed roster on `commit`.
pub struct RosterUnitOfWork<'a> {
    committed: MutexGuard<'a, Roster>,
    working: Arc<Mutex<Roster>>,
    file: Option<&'a RosterFile>,
}

#[async_trait::async_trait]
impl<'a> UnitOfWork<'a> for RosterUnitOfWork<'a> {
    fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
        Arc::new(RosterPlayerRepository::new(self.working.clone()))
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        let RosterUnitOfWork {
            mut committed,
            working,
            file,
        } = *self;

        let roster = working.lock().await.clone();
        if let Some(file) = file {
            file.save(&roster).await?;
        }
        *committed = roster;

        tracing::debug!(players = committed.players.len(), "Roster committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        // Dropping the working copy discards its changes.
        Ok(())
    }
}

/// Provides units of work over a single roster, in memory or mirrored to a
/// JSON file.
pub struct RosterUnitOfWorkProvider {
    roster: Mutex<Roster>,
    file: Option<RosterFile>,
}

impl RosterUnitOfWorkProvider {
    pub fn in_memory(roster: Roster) -> Self {
        Self {
            roster: Mutex::new(roster),
            file: None,
        }
    }

    /// Loads the roster from `file`; every commit writes it back.
    pub async fn file_backed(file: RosterFile) -> Result<Self, StoreError> {
        let roster = file.load().await?;
        tracing::info!(
            path = %file.path().display(),
            players = roster.players.len(),
            "Opened roster file"
        );

        Ok(Self {
            roster: Mutex::new(roster),
            file: Some(file),
        })
    }
}

#[async_trait::async_trait]
impl UnitOfWorkProvider for RosterUnitOfWorkProvider {
    async fn tx<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, StoreError> {
        let committed = self.roster.lock().await;
        let working = Arc::new(Mutex::new(committed.clone()));

        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(RosterUnitOfWork {
            committed,
            working,
            file: self.file.as_ref(),
        });
        Ok(uow)
    }
}
