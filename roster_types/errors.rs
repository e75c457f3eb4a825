use serde::Serialize;

pub mod player_error;
pub mod store_error;

pub use player_error::{PlayerError, PlayerErrorType};
pub use store_error::StoreError;

pub type Result<T, E = PlayerError> = std::result::Result<T, E>;

/// Error payload handed to the boundary layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_type: PlayerErrorType,
    pub message: String,
    pub player_id: Option<i32>,
}

impl From<&PlayerError> for ErrorResponse {
    fn from(err: &PlayerError) -> Self {
        Self {
            error_type: err.error_type(),
            message: err.to_string(),
            player_id: err.player_id(),
        }
    }
}
