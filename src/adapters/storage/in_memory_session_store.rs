//! In-Memory Session Store Adapter
//!
//! Stores session state and final reports in memory.
//! Used by the console trainer and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::analysis::FeedbackReport;
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::simulation::SessionState;
use crate::ports::{SessionStore, SessionStoreError, StoredReport};

/// In-memory storage for training sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    states: Arc<RwLock<HashMap<SessionId, SessionState>>>,
    reports: Arc<RwLock<HashMap<SessionId, StoredReport>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.states.read().await.len()
    }

    /// Get the number of stored reports
    pub async fn report_count(&self) -> usize {
        self.reports.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, id: SessionId, state: &SessionState) -> Result<(), SessionStoreError> {
        let mut states = self.states.write().await;
        if states.contains_key(&id) {
            return Err(SessionStoreError::AlreadyExists(id));
        }
        states.insert(id, state.clone());
        Ok(())
    }

    async fn load(&self, id: SessionId) -> Result<SessionState, SessionStoreError> {
        let states = self.states.read().await;
        states
            .get(&id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(id))
    }

    async fn save(&self, id: SessionId, state: &SessionState) -> Result<(), SessionStoreError> {
        let mut states = self.states.write().await;
        match states.get_mut(&id) {
            Some(existing) => {
                *existing = state.clone();
                Ok(())
            }
            None => Err(SessionStoreError::NotFound(id)),
        }
    }

    async fn save_report(
        &self,
        id: SessionId,
        report: &FeedbackReport,
        finished_at: Timestamp,
    ) -> Result<(), SessionStoreError> {
        if !self.states.read().await.contains_key(&id) {
            return Err(SessionStoreError::NotFound(id));
        }
        self.reports.write().await.insert(
            id,
            StoredReport {
                report: report.clone(),
                finished_at,
            },
        );
        Ok(())
    }

    async fn load_report(&self, id: SessionId) -> Result<Option<StoredReport>, SessionStoreError> {
        if !self.states.read().await.contains_key(&id) {
            return Err(SessionStoreError::NotFound(id));
        }
        Ok(self.reports.read().await.get(&id).cloned())
    }
}
