//! Errors raised by the training session handlers.

use crate::domain::foundation::SessionId;
use crate::ports::SessionStoreError;

#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("Session {0} has already finished")]
    SessionFinished(SessionId),

    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

impl TrainingError {
    /// True if the session does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(SessionStoreError::NotFound(_)))
    }
}
