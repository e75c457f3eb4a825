use dotenvy::dotenv;
use std::{env, path::PathBuf};

pub struct Config {
    /// JSON roster document backing the store. `None` keeps the roster in memory.
    pub data_path: Option<PathBuf>,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let data_path = match env::var("ROSTER_DATA_PATH") {
            Ok(val) if !val.trim().is_empty() => Some(PathBuf::from(val)),
            _ => None,
        };

        let log_dir = match env::var("ROSTER_LOG_DIR") {
            Ok(val) if !val.trim().is_empty() => PathBuf::from(val),
            _ => PathBuf::from("logs"),
        };

        Self { data_path, log_dir }
    }

    pub fn in_memory() -> Self {
        Self {
            data_path: None,
            log_dir: PathBuf::from("logs"),
        }
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }
}
