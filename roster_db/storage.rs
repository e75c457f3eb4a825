use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use roster_app::{config::Config, uow::UnitOfWorkProvider};
use roster_types::errors::StoreError;

use crate::{roster::Roster, uow::RosterUnitOfWorkProvider};

/// Flat JSON roster document on disk.
#[derive(Debug, Clone)]
pub struct RosterFile {
    path: PathBuf,
}

impl RosterFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the roster. A missing file is an empty roster.
    pub async fn load(&self) -> Result<Roster, StoreError> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "Roster file missing, starting empty");
                return Ok(Roster::default());
            }
            Err(e) => return Err(e.into()),
        };

        let document: Roster = serde_json::from_str(&json)?;
        let roster = Roster::new(document.players)?;
        tracing::debug!(
            path = %self.path.display(),
            players = roster.players.len(),
            "Roster loaded"
        );

        Ok(roster)
    }

    /// Writes the roster through a sibling temp file and a rename, so readers
    /// never see a half-written document.
    pub async fn save(&self, roster: &Roster) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(roster)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::debug!(
            path = %self.path.display(),
            players = roster.players.len(),
            "Roster saved"
        );
        Ok(())
    }
}

/// Opens the record store described by `config`: file-backed when a data path
/// is set, in memory otherwise.
pub async fn open_store(config: &Config) -> Result<Arc<dyn UnitOfWorkProvider>, StoreError> {
    let provider = match &config.data_path {
        Some(path) => RosterUnitOfWorkProvider::file_backed(RosterFile::new(path)).await?,
        None => {
            tracing::info!("No roster file configured, keeping players in memory");
            RosterUnitOfWorkProvider::in_memory(Roster::default())
        }
    };

    Ok(Arc::new(provider))
}
