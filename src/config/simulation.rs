//! Simulation tuning constants
//!
//! The thresholds and probabilities are empirically tuned product values.
//! They live here as named configuration so they can be overridden via
//! `SALES_SIM__SIMULATION__*` without touching the engine.

use serde::Deserialize;

use super::error::ValidationError;

/// Tuned constants for the conversation engine
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Intro gate: minimum questions asked during the intro
    pub intro_min_questions: u32,

    /// Intro gate: minimum open questions asked during the intro
    pub intro_min_open_questions: u32,

    /// Needs gate: minimum questions asked during discovery
    pub needs_min_questions: u32,

    /// Needs gate: minimum open questions asked during discovery
    pub needs_min_open_questions: u32,

    /// Needs gate: minimum needs identified during discovery
    pub needs_min_identified: u32,

    /// Chance the client raises an objection during presentation
    pub objection_probability: f64,

    /// Chance a DISC phrase is prepended for a new client
    pub overlay_probability_new: f64,

    /// Chance a DISC phrase is prepended for a repeat client
    pub overlay_probability_repeat: f64,

    /// Chance of a tone-specific tail (affirmation or data request)
    pub tone_tail_probability: f64,

    /// Lower bound of the running mood score
    pub mood_score_min: i32,

    /// Upper bound of the running mood score
    pub mood_score_max: i32,

    /// Absolute bound of a single discovery mood delta
    pub discovery_delta_limit: i32,

    /// Lower bound of the intro mood level
    pub mood_level_min: i32,

    /// Upper bound of the intro mood level
    pub mood_level_max: i32,

    /// Sentences without a question that make a monologue
    pub monologue_min_sentences: usize,

    /// Token overlap at which a question counts as repeated
    pub repeat_min_overlap: f64,

    /// Prefix length ratio at which a question counts as repeated
    pub repeat_min_prefix_ratio: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            intro_min_questions: 1,
            intro_min_open_questions: 1,
            needs_min_questions: 5,
            needs_min_open_questions: 3,
            needs_min_identified: 2,
            objection_probability: 0.4,
            overlay_probability_new: 0.2,
            overlay_probability_repeat: 0.35,
            tone_tail_probability: 0.5,
            mood_score_min: -5,
            mood_score_max: 5,
            discovery_delta_limit: 3,
            mood_level_min: 1,
            mood_level_max: 5,
            monologue_min_sentences: 6,
            repeat_min_overlap: 0.7,
            repeat_min_prefix_ratio: 0.75,
        }
    }
}

impl SimulationConfig {
    /// Validate simulation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let probabilities = [
            ("objection_probability", self.objection_probability),
            ("overlay_probability_new", self.overlay_probability_new),
            ("overlay_probability_repeat", self.overlay_probability_repeat),
            ("tone_tail_probability", self.tone_tail_probability),
            ("repeat_min_overlap", self.repeat_min_overlap),
            ("repeat_min_prefix_ratio", self.repeat_min_prefix_ratio),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::InvalidProbability(name));
            }
        }

        if self.mood_score_min >= self.mood_score_max {
            return Err(ValidationError::InvalidBounds("mood_score"));
        }
        if self.mood_level_min >= self.mood_level_max {
            return Err(ValidationError::InvalidBounds("mood_level"));
        }
        if self.discovery_delta_limit <= 0 {
            return Err(ValidationError::InvalidBounds("discovery_delta_limit"));
        }

        let thresholds = [
            ("needs_min_questions", self.needs_min_questions),
            ("needs_min_open_questions", self.needs_min_open_questions),
            ("needs_min_identified", self.needs_min_identified),
            ("monologue_min_sentences", self.monologue_min_sentences as u32),
        ];
        for (name, value) in thresholds {
            if value == 0 {
                return Err(ValidationError::ZeroThreshold(name));
            }
        }
        Ok(())
    }
}
