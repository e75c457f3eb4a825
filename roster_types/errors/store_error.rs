use thiserror::Error;

/// Errors raised by record store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Player with ID {0} not found in store")]
    PlayerNotFound(i32),

    #[error("Player ID {0} is already taken")]
    DuplicateId(i32),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
