//! FinishSessionHandler - Command handler for ending a session on demand.
//!
//! Used when the trainee stops before the conversation reaches its natural
//! end. Finishing twice returns the report stored the first time.

use std::sync::Arc;

use tracing::info;

use crate::domain::analysis::FeedbackReport;
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::simulation::TurnSimulator;
use crate::ports::SessionStore;

use super::TrainingError;

/// Command to end a session and produce its report.
#[derive(Debug, Clone, Copy)]
pub struct FinishSessionCommand {
    pub session_id: SessionId,
}

/// The session's report and when it was recorded.
#[derive(Debug, Clone)]
pub struct FinishSessionResult {
    pub report: FeedbackReport,
    pub finished_at: Timestamp,
}

/// Handler for finishing sessions.
pub struct FinishSessionHandler {
    store: Arc<dyn SessionStore>,
    simulator: Arc<TurnSimulator>,
}

impl FinishSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, simulator: Arc<TurnSimulator>) -> Self {
        Self { store, simulator }
    }

    pub async fn handle(
        &self,
        cmd: FinishSessionCommand,
    ) -> Result<FinishSessionResult, TrainingError> {
        let id = cmd.session_id;

        if let Some(stored) = self.store.load_report(id).await? {
            return Ok(FinishSessionResult {
                report: stored.report,
                finished_at: stored.finished_at,
            });
        }

        let state = self.store.load(id).await?;
        let report = self.simulator.finish(&state);
        let finished_at = Timestamp::now();
        self.store.save_report(id, &report, finished_at).await?;

        info!(
            session_id = %id,
            phase = %state.phase,
            overall_score = report.overall_score,
            "Training session finished early"
        );

        Ok(FinishSessionResult {
            report,
            finished_at,
        })
    }
}
