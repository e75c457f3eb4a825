use anyhow::Context;
use clap::{Parser, Subcommand};
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use roster_app::{config::Config, service::PlayerService};
use roster_db::open_store;
use roster_types::{
    errors::{ErrorResponse, PlayerError},
    player::Player,
};

mod logs;
use logs::setup_logging;

/// Manage the tennis players roster.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about)]
struct Cli {
    /// JSON roster file. Overrides ROSTER_DATA_PATH.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: RosterCommand,
}

#[derive(Debug, Subcommand)]
enum RosterCommand {
    /// List players ordered by rank.
    List,
    /// Show one player.
    Get { id: i32 },
    /// Add the player described in a JSON file. Any id in the file is ignored.
    Add { payload: PathBuf },
    /// Replace a player with the one described in a JSON file.
    Update { id: i32, payload: PathBuf },
    /// Delete a player.
    Delete { id: i32 },
    /// Best country, average BMI and median height.
    Stats,
}

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(path) = cli.data {
        config = config.with_data_path(path);
    }
    let _log_guard = match setup_logging(&config.log_dir) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &config).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: RosterCommand, config: &Config) -> anyhow::Result<String> {
    let store = open_store(config)
        .await
        .context("unable to open the roster store")?;
    let service = PlayerService::new(store);

    let output = match command {
        RosterCommand::List => serde_json::to_string_pretty(&service.list_players().await?)?,
        RosterCommand::Get { id } => {
            serde_json::to_string_pretty(&service.get_player_by_id(id).await?)?
        }
        RosterCommand::Add { payload } => {
            let player = read_payload(&payload).await?;
            serde_json::to_string_pretty(&service.add_player(player).await?)?
        }
        RosterCommand::Update { id, payload } => {
            let player = read_payload(&payload).await?;
            serde_json::to_string_pretty(&service.update_player(id, player).await?)?
        }
        RosterCommand::Delete { id } => {
            service.delete_player(id).await?;
            format!("Player {id} deleted")
        }
        RosterCommand::Stats => serde_json::to_string_pretty(&service.statistics().await?)?,
    };

    Ok(output)
}

async fn read_payload(path: &Path) -> anyhow::Result<Player> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("unable to read {}", path.display()))?;

    serde_json::from_str(&json).with_context(|| format!("invalid player in {}", path.display()))
}

/// Business errors go to stderr as an `ErrorResponse` document, anything else
/// as a plain message.
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<PlayerError>() {
        Some(player_err) => {
            tracing::warn!(error = %player_err, "Roster operation failed");
            let response = ErrorResponse::from(player_err);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{player_err}"),
            }
        }
        None => {
            tracing::error!(error = ?err, "Roster command failed");
            eprintln!("error: {err:#}");
        }
    }
}
