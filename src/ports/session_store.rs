//! Session Store Port - Durability for training sessions between turns.
//!
//! The simulation engine is pure; whatever keeps a session alive between
//! trainee turns sits behind this port.

use async_trait::async_trait;

use crate::domain::analysis::FeedbackReport;
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::simulation::SessionState;

/// Errors that can occur during session storage operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Session already exists: {0}")]
    AlreadyExists(SessionId),
}

/// A finished session's report and when it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredReport {
    pub report: FeedbackReport,
    pub finished_at: Timestamp,
}

/// Port for persisting session state and final reports
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a newly started session.
    ///
    /// # Errors
    /// Returns `SessionStoreError::AlreadyExists` if the id is taken
    async fn create(&self, id: SessionId, state: &SessionState) -> Result<(), SessionStoreError>;

    /// Load the latest state of a session.
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no session exists
    async fn load(&self, id: SessionId) -> Result<SessionState, SessionStoreError>;

    /// Replace the state of an existing session.
    async fn save(&self, id: SessionId, state: &SessionState) -> Result<(), SessionStoreError>;

    /// Record the final feedback report.
    async fn save_report(
        &self,
        id: SessionId,
        report: &FeedbackReport,
        finished_at: Timestamp,
    ) -> Result<(), SessionStoreError>;

    /// Load the final report, if the session has finished.
    async fn load_report(&self, id: SessionId) -> Result<Option<StoredReport>, SessionStoreError>;
}
