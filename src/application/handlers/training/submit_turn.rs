//! SubmitTurnHandler - Command handler for one trainee turn.
//!
//! Turns for the same session are processed strictly one at a time; turns
//! for different sessions run independently.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::simulation::{PersonaConfig, TurnOutcome, TurnSimulator};
use crate::ports::{RandomSource, SessionStore};

use super::TrainingError;

/// Command carrying one trainee message.
#[derive(Debug, Clone)]
pub struct SubmitTurnCommand {
    pub session_id: SessionId,
    pub text: String,
    /// Persona supplied by the request layer. Falls back to the stored one.
    pub persona: Option<PersonaConfig>,
}

/// One async mutex per session id with a turn in flight.
#[derive(Debug, Default)]
struct SessionLocks {
    locks: Mutex<HashMap<SessionId, Arc<Mutex<()>>>>,
}

impl SessionLocks {
    async fn acquire(&self, id: SessionId) -> Arc<Mutex<()>> {
        self.locks.lock().await.entry(id).or_default().clone()
    }

    /// Drops the entry unless another turn is already waiting on it.
    async fn release(&self, id: SessionId, lock: Arc<Mutex<()>>) {
        let mut locks = self.locks.lock().await;
        // One reference held by the map, one by `lock`
        if Arc::strong_count(&lock) == 2 {
            locks.remove(&id);
        }
        // Must drop while the map is still locked
        drop(lock);
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.locks.lock().await.len()
    }
}

/// Handler for trainee turns.
pub struct SubmitTurnHandler {
    store: Arc<dyn SessionStore>,
    simulator: Arc<TurnSimulator>,
    rng: Mutex<Box<dyn RandomSource>>,
    locks: SessionLocks,
}

impl SubmitTurnHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        simulator: Arc<TurnSimulator>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            store,
            simulator,
            rng: Mutex::new(rng),
            locks: SessionLocks::default(),
        }
    }

    pub async fn handle(&self, cmd: SubmitTurnCommand) -> Result<TurnOutcome, TrainingError> {
        let id = cmd.session_id;
        // Unknown ids are rejected before they get a lock entry
        self.store.load(id).await?;

        let lock = self.locks.acquire(id).await;
        let result = {
            let _turn = lock.lock().await;
            self.run_turn(id, cmd).await
        };
        self.locks.release(id, lock).await;
        result
    }

    async fn run_turn(
        &self,
        id: SessionId,
        cmd: SubmitTurnCommand,
    ) -> Result<TurnOutcome, TrainingError> {
        // 1. Load state and refuse finished sessions
        let state = self.store.load(id).await?;
        if state.is_finished() || self.store.load_report(id).await?.is_some() {
            warn!(session_id = %id, "Turn submitted to a finished session");
            return Err(TrainingError::SessionFinished(id));
        }

        // 2. Run the turn
        let persona = cmd.persona.unwrap_or(state.persona);
        let outcome = {
            let mut rng = self.rng.lock().await;
            self.simulator.step(&state, &cmd.text, &persona, &mut **rng)
        };

        debug!(
            session_id = %id,
            phase = %state.phase,
            next_phase = %outcome.next_phase,
            mood_score = outcome.mood_score,
            "Turn processed"
        );

        // 3. Persist state, and the report once the session has ended
        self.store.save(id, &outcome.state).await?;
        if let Some(report) = &outcome.feedback {
            self.store.save_report(id, report, Timestamp::now()).await?;
            info!(
                session_id = %id,
                overall_score = report.overall_score,
                turns = outcome.state.turn_count,
                "Training session finished"
            );
        }

        Ok(outcome)
    }
}
