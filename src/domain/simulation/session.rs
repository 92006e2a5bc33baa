//! Session state threaded through the turn loop.

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;

use super::metrics::{IntroFlags, Metrics, PhaseCounters};
use super::mood::MoodReason;
use super::persona::PersonaConfig;
use super::phase::SalesPhase;

/// Everything the engine needs to evaluate the next trainee turn.
///
/// A turn never mutates a state in place; the simulator returns a new one.
/// Missing fields in stored JSON default to a fresh session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    pub phase: SalesPhase,
    pub persona: PersonaConfig,
    pub metrics: Metrics,
    pub intro_flags: IntroFlags,
    pub phase_counters: PhaseCounters,
    pub mood_score: i32,
    /// Intro-only verbosity scale.
    pub mood_level: i32,
    /// Tags explaining the last mood delta.
    pub mood_reasons: Vec<MoodReason>,
    pub turn_count: u32,
}

impl SessionState {
    /// Fresh session with zeroed metrics, flags and mood.
    pub fn new(persona: PersonaConfig, config: &SimulationConfig) -> Self {
        Self {
            phase: SalesPhase::Intro,
            persona,
            metrics: Metrics::default(),
            intro_flags: IntroFlags::default(),
            phase_counters: PhaseCounters::default(),
            mood_score: 0,
            mood_level: persona.initial_mood_level(config.mood_level_min, config.mood_level_max),
            mood_reasons: Vec::new(),
            turn_count: 0,
        }
    }

    /// Brings a state loaded from outside back within configured bounds.
    pub fn sanitized(mut self, config: &SimulationConfig) -> Self {
        self.mood_score = self
            .mood_score
            .clamp(config.mood_score_min, config.mood_score_max);
        self.mood_level = self
            .mood_level
            .clamp(config.mood_level_min, config.mood_level_max);
        self
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SalesPhase::Finished
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(PersonaConfig::default(), &SimulationConfig::default())
    }
}
