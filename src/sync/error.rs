use thiserror::Error as ThisError;

use crate::services::fpl_client::FplClientError;

#[derive(Debug, ThisError)]
pub enum SyncError {
    /// Upstream unreachable, non-success status or undecodable body. Nothing was written.
    #[error(transparent)]
    Transport(#[from] FplClientError),

    /// Anything that went wrong while reconciling records. Staged writes are rolled back.
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

#[derive(Debug, ThisError)]
pub enum ProcessingError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Malformed upstream record: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Unexpected payload shape: {0}")]
    UnexpectedShape(String),
}

impl SyncError {
    pub fn unexpected_shape(message: impl Into<String>) -> Self {
        SyncError::Processing(ProcessingError::UnexpectedShape(message.into()))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, SyncError::Transport(_))
    }
}

impl From<sqlx::Error> for SyncError {
    fn from(e: sqlx::Error) -> Self {
        SyncError::Processing(ProcessingError::Database(e))
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(e: serde_json::Error) -> Self {
        SyncError::Processing(ProcessingError::Payload(e))
    }
}
