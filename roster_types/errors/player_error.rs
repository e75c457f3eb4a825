use serde::Serialize;
use thiserror::Error;

/// Closed set of business failure kinds surfaced to the boundary layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerErrorType {
    NotFound,
    AlreadyExists,
    CreationFailed,
    UpdateFailed,
    DeletionFailed,
    /// Raised by the boundary layer on authorization denials.
    Forbidden,
}

/// Errors for player roster logic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Player with ID {0} not found")]
    NotFound(i32),

    #[error("No players could be loaded from the store")]
    NoPlayers,

    #[error("A player with ID {0} already exists")]
    AlreadyExists(i32),

    #[error("Player creation failed: {reason}")]
    CreationFailed { reason: String },

    #[error("Cannot update player {id}: {reason}")]
    UpdateFailed { id: i32, reason: String },

    #[error("Cannot delete player {id}: {reason}")]
    DeletionFailed { id: i32, reason: String },

    #[error("Access denied: insufficient rights for this action")]
    Forbidden,
}

impl PlayerError {
    pub fn error_type(&self) -> PlayerErrorType {
        match self {
            PlayerError::NotFound(_) | PlayerError::NoPlayers => PlayerErrorType::NotFound,
            PlayerError::AlreadyExists(_) => PlayerErrorType::AlreadyExists,
            PlayerError::CreationFailed { .. } => PlayerErrorType::CreationFailed,
            PlayerError::UpdateFailed { .. } => PlayerErrorType::UpdateFailed,
            PlayerError::DeletionFailed { .. } => PlayerErrorType::DeletionFailed,
            PlayerError::Forbidden => PlayerErrorType::Forbidden,
        }
    }

    /// The player the failure refers to, if any.
    pub fn player_id(&self) -> Option<i32> {
        match self {
            PlayerError::NotFound(id)
            | PlayerError::AlreadyExists(id)
            | PlayerError::UpdateFailed { id, .. }
            | PlayerError::DeletionFailed { id, .. } => Some(*id),
            PlayerError::NoPlayers
            | PlayerError::CreationFailed { .. }
            | PlayerError::Forbidden => None,
        }
    }

    pub fn creation_failed(reason: impl ToString) -> Self {
        PlayerError::CreationFailed {
            reason: reason.to_string(),
        }
    }

    pub fn update_failed(id: i32, reason: impl ToString) -> Self {
        PlayerError::UpdateFailed {
            id,
            reason: reason.to_string(),
        }
    }

    pub fn deletion_failed(id: i32, reason: impl ToString) -> Self {
        PlayerError::DeletionFailed {
            id,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variants_share_error_type() {
        assert_eq!(PlayerError::NotFound(3).error_type(), PlayerErrorType::NotFound);
        assert_eq!(PlayerError::NoPlayers.error_type(), PlayerErrorType::NotFound);
        assert_eq!(PlayerError::NotFound(3).player_id(), Some(3));
        assert_eq!(PlayerError::NoPlayers.player_id(), None);
    }

    #[test]
    fn test_failure_constructors_embed_reason() {
        let err = PlayerError::update_failed(4, "invalid height for BMI");

        assert_eq!(err.error_type(), PlayerErrorType::UpdateFailed);
        assert_eq!(err.player_id(), Some(4));
        assert_eq!(err.to_string(), "Cannot update player 4: invalid height for BMI");
        assert_eq!(
            PlayerError::creation_failed("store offline").to_string(),
            "Player creation failed: store offline"
        );
    }
}
