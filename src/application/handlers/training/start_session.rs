//! StartSessionHandler - Command handler for starting a training session.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::SessionId;
use crate::domain::simulation::{ClientReply, PersonaConfig, SessionState, TurnSimulator};
use crate::ports::SessionStore;

use super::TrainingError;

/// Command to start a new training session.
#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand {
    pub persona: PersonaConfig,
}

/// Result of successful session start.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session_id: SessionId,
    pub state: SessionState,
    pub greeting: ClientReply,
}

/// Handler for starting sessions.
pub struct StartSessionHandler {
    store: Arc<dyn SessionStore>,
    simulator: Arc<TurnSimulator>,
}

impl StartSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, simulator: Arc<TurnSimulator>) -> Self {
        Self { store, simulator }
    }

    pub async fn handle(&self, cmd: StartSessionCommand) -> Result<StartSessionResult, TrainingError> {
        let session_id = SessionId::new();
        let (state, greeting) = self.simulator.start(cmd.persona);

        self.store.create(session_id, &state).await?;

        info!(
            session_id = %session_id,
            difficulty = ?state.persona.difficulty,
            client_category = ?state.persona.client_category,
            disc_type = ?state.persona.disc_type,
            "Training session started"
        );

        Ok(StartSessionResult {
            session_id,
            state,
            greeting,
        })
    }
}
