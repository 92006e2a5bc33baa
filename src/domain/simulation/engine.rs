//! Phase transitions evaluated once per completed trainee turn.

use crate::config::SimulationConfig;
use crate::domain::foundation::StateMachine;
use crate::ports::RandomSource;

use super::gate::PhaseGateResult;
use super::metrics::Metrics;
use super::phase::SalesPhase;

/// Triggers observed on the turn being evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnTriggers {
    /// The trainee thanked or said goodbye.
    pub thanks: bool,
}

/// Computes the next phase from the current one, the gate and metrics.
#[derive(Debug, Clone, Copy)]
pub struct TransitionEngine {
    objection_probability: f64,
}

impl TransitionEngine {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            objection_probability: config.objection_probability,
        }
    }

    /// Next phase after a turn.
    ///
    /// The objection draw only consumes randomness while no objection has
    /// been handled yet. Any candidate the phase machine rejects leaves the
    /// phase unchanged.
    pub fn next_phase(
        &self,
        current: SalesPhase,
        gate: &PhaseGateResult,
        metrics: &Metrics,
        triggers: TurnTriggers,
        rng: &mut dyn RandomSource,
    ) -> SalesPhase {
        let candidate = match current {
            SalesPhase::Intro if gate.passed => SalesPhase::Discovery,
            SalesPhase::Discovery if gate.passed => SalesPhase::Presentation,
            SalesPhase::Presentation => {
                if metrics.objection_handling_attempts == 0
                    && rng.chance(self.objection_probability)
                {
                    SalesPhase::Objections
                } else if metrics.closing_attempts > 0 {
                    SalesPhase::Closing
                } else {
                    SalesPhase::Presentation
                }
            }
            SalesPhase::Objections if metrics.closing_attempts > 0 => SalesPhase::Closing,
            SalesPhase::Objections => SalesPhase::Presentation,
            SalesPhase::Closing if triggers.thanks && metrics.closing_attempts > 0 => {
                SalesPhase::Finished
            }
            other => other,
        };

        current.transition_to(candidate).unwrap_or(current)
    }
}
