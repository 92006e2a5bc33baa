//! Accumulated session metrics, intro flags and per-phase counters.
//!
//! All three are immutable values. Each turn folds its [`SignalSet`] into
//! a new value; counters only grow and flags, once set, stay set.

use serde::{Deserialize, Serialize};

use super::phase::SalesPhase;
use super::signals::{IntroSignals, SignalSet};

/// Session-wide monotonic counters consumed by the feedback synthesizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    pub questions_asked: u32,
    pub open_questions: u32,
    pub needs_identified: u32,
    pub value_statements: u32,
    pub objection_handling_attempts: u32,
    pub objections_handled_well: u32,
    pub closing_attempts: u32,
    pub adaptation_to_disc: u32,
}

impl Metrics {
    /// Returns the metrics after folding in one turn's signals.
    pub fn accrue(&self, signals: &SignalSet) -> Self {
        let needs = signals.discovery.map_or(0, |d| d.needs_identified);
        let c = &signals.commercial;

        Self {
            questions_asked: self.questions_asked.saturating_add(signals.shape.question_count),
            open_questions: self
                .open_questions
                .saturating_add(signals.shape.open_question_count),
            needs_identified: self.needs_identified.saturating_add(needs),
            value_statements: self.value_statements.saturating_add(c.value_statements),
            objection_handling_attempts: self
                .objection_handling_attempts
                .saturating_add(c.objection_handling_attempt as u32),
            objections_handled_well: self
                .objections_handled_well
                .saturating_add(c.objection_handled_well as u32),
            closing_attempts: self.closing_attempts.saturating_add(c.closing_attempt as u32),
            adaptation_to_disc: self
                .adaptation_to_disc
                .saturating_add(signals.disc_adapted as u32),
        }
    }

    /// True if no counter in `self` is below the same counter in `earlier`.
    pub fn dominates(&self, earlier: &Metrics) -> bool {
        self.questions_asked >= earlier.questions_asked
            && self.open_questions >= earlier.open_questions
            && self.needs_identified >= earlier.needs_identified
            && self.value_statements >= earlier.value_statements
            && self.objection_handling_attempts >= earlier.objection_handling_attempts
            && self.objections_handled_well >= earlier.objections_handled_well
            && self.closing_attempts >= earlier.closing_attempts
            && self.adaptation_to_disc >= earlier.adaptation_to_disc
    }
}

/// Sticky intro observations. A flag is never reset once true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroFlags {
    pub goal_framed: bool,
    pub agenda_proposed: bool,
    pub consent_obtained: bool,
    /// An open question was asked.
    pub diagnostic_started: bool,
    pub purpose_explained: bool,
    pub early_pitch: bool,
    pub long_monologue: bool,
}

impl IntroFlags {
    pub fn merge(&self, intro: &IntroSignals) -> Self {
        Self {
            goal_framed: self.goal_framed || intro.goal_framed,
            agenda_proposed: self.agenda_proposed || intro.agenda_proposed,
            consent_obtained: self.consent_obtained || intro.consent_obtained,
            diagnostic_started: self.diagnostic_started || intro.open_question,
            purpose_explained: self.purpose_explained || intro.purpose_explained,
            early_pitch: self.early_pitch || intro.early_pitch,
            long_monologue: self.long_monologue || intro.long_monologue,
        }
    }
}

/// Questions asked while in the intro phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroCounters {
    pub questions_asked: u32,
    pub open_questions: u32,
}

/// Needs-analysis accumulators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeedsCounters {
    pub asked_questions: u32,
    pub open_questions: u32,
    pub identified_needs: u32,
    pub impact_found: bool,
    pub summary_found: bool,
    pub confirm_found: bool,
    pub early_pitch: bool,
    /// Normalized text of the most recent open question.
    pub last_open_question: Option<String>,
}

/// Per-phase accumulators, keyed by phase name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseCounters {
    pub intro: IntroCounters,
    pub needs: NeedsCounters,
}

impl PhaseCounters {
    /// Returns the counters after folding in one turn taken in `phase`.
    ///
    /// Only the active phase's accumulator changes.
    pub fn fold(&self, phase: SalesPhase, signals: &SignalSet) -> Self {
        let shape = &signals.shape;
        match phase {
            SalesPhase::Intro => Self {
                intro: IntroCounters {
                    questions_asked: self.intro.questions_asked.saturating_add(shape.question_count),
                    open_questions: self
                        .intro
                        .open_questions
                        .saturating_add(shape.open_question_count),
                },
                needs: self.needs.clone(),
            },
            SalesPhase::Discovery => {
                let Some(d) = signals.discovery else {
                    return self.clone();
                };
                let needs = &self.needs;
                Self {
                    intro: self.intro,
                    needs: NeedsCounters {
                        asked_questions: needs.asked_questions.saturating_add(shape.question_count),
                        open_questions: needs
                            .open_questions
                            .saturating_add(shape.open_question_count),
                        identified_needs: needs.identified_needs.saturating_add(d.needs_identified),
                        impact_found: needs.impact_found || d.impact_exploration,
                        summary_found: needs.summary_found || d.summary,
                        confirm_found: needs.confirm_found || d.confirmation,
                        early_pitch: needs.early_pitch || d.early_pitch,
                        last_open_question: shape
                            .open_questions
                            .last()
                            .cloned()
                            .or_else(|| needs.last_open_question.clone()),
                    },
                }
            }
            _ => self.clone(),
        }
    }
}
