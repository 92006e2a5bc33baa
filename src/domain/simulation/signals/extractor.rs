//! Signal extraction from a single trainee message.
//!
//! Produces a transient [`SignalSet`]. Signals are never persisted; the
//! turn simulator folds them into counters, flags and metrics.

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::domain::simulation::persona::{DiscType, PersonaConfig};
use crate::domain::simulation::phase::SalesPhase;

use super::lexicon::{self, normalize, PhraseTable};
use super::text::{is_repeated_question, TextShape};

/// Persona-specific behaviour that annoys a DISC client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscRedFlag {
    /// Dominant client faced with a long monologue.
    DominantMonologue,
    /// Conscientious client given certainty claims without evidence.
    ConscientiousUnsupportedCertainty,
    /// Steady client put under pressure.
    SteadyPressure,
}

/// Signals evaluated with the intro lexicons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntroSignals {
    pub goal_framed: bool,
    pub agenda_proposed: bool,
    pub consent_obtained: bool,
    pub purpose_explained: bool,
    pub open_question: bool,
    pub early_pitch: bool,
    pub long_monologue: bool,
    pub pressure: bool,
    pub disc_mismatch: Option<DiscRedFlag>,
}

/// Signals evaluated with the needs-analysis lexicons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoverySignals {
    pub needs_identified: u32,
    pub impact_exploration: bool,
    pub summary: bool,
    pub confirmation: bool,
    pub follow_up_reference: bool,
    pub purpose_explained: bool,
    pub repeated_question: bool,
    pub early_pitch: bool,
    pub red_flag: Option<DiscRedFlag>,
}

/// Signals relevant once the trainee is presenting, handling objections
/// or closing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommercialSignals {
    pub value_statements: u32,
    pub objection_handling_attempt: bool,
    pub objection_handled_well: bool,
    pub closing_attempt: bool,
    pub thanks: bool,
}

/// Everything extracted from one trainee message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalSet {
    pub shape: TextShape,
    pub intro: Option<IntroSignals>,
    pub discovery: Option<DiscoverySignals>,
    pub commercial: CommercialSignals,
    pub disc_adapted: bool,
    empty: bool,
}

impl SignalSet {
    /// The zero set returned for empty input.
    pub fn empty() -> Self {
        Self {
            empty: true,
            ..Default::default()
        }
    }

    /// True when the message carried no text at all.
    pub fn is_empty(&self) -> bool {
        self.empty
    }
}

/// Derives signals from raw trainee text.
#[derive(Debug, Clone)]
pub struct SignalExtractor {
    monologue_min_sentences: usize,
    repeat_min_overlap: f64,
    repeat_min_prefix_ratio: f64,
}

impl SignalExtractor {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            monologue_min_sentences: config.monologue_min_sentences,
            repeat_min_overlap: config.repeat_min_overlap,
            repeat_min_prefix_ratio: config.repeat_min_prefix_ratio,
        }
    }

    /// Extracts the signal set for `text` in `phase`.
    ///
    /// `last_open_question` is the normalized last open question asked
    /// during discovery, used for repeated-question detection.
    pub fn extract(
        &self,
        text: &str,
        phase: SalesPhase,
        persona: &PersonaConfig,
        last_open_question: Option<&str>,
    ) -> SignalSet {
        if text.trim().is_empty() {
            return SignalSet::empty();
        }

        let normalized = normalize(text);
        let shape = TextShape::analyze(text);
        let has = |table: PhraseTable| table.matches(&normalized);

        let monologue = shape.is_monologue(self.monologue_min_sentences);
        let pressure = has(lexicon::PRESSURE_PHRASES);
        let early_pitch = has(lexicon::PRODUCT_PHRASES) && shape.open_question_count == 0;
        let red_flag = disc_red_flag(persona.disc_type, monologue, pressure, &normalized);

        let intro = (phase == SalesPhase::Intro).then(|| IntroSignals {
            goal_framed: has(lexicon::GOAL_PHRASES),
            agenda_proposed: has(lexicon::AGENDA_KEYWORDS) || has(lexicon::AGENDA_SEQUENCE),
            consent_obtained: has(lexicon::CONSENT_PHRASES),
            purpose_explained: has(lexicon::PURPOSE_PHRASES),
            open_question: shape.open_question_count > 0,
            early_pitch,
            long_monologue: monologue,
            pressure,
            disc_mismatch: red_flag,
        });

        let discovery = (phase == SalesPhase::Discovery).then(|| DiscoverySignals {
            needs_identified: lexicon::NEED_PHRASES.hits(&normalized) as u32,
            impact_exploration: has(lexicon::IMPACT_PHRASES),
            summary: has(lexicon::SUMMARY_PHRASES),
            confirmation: has(lexicon::CONFIRM_PHRASES),
            follow_up_reference: has(lexicon::FOLLOW_UP_PHRASES),
            purpose_explained: has(lexicon::PURPOSE_PHRASES),
            repeated_question: self.repeats_previous(&shape.open_questions, last_open_question),
            early_pitch,
            red_flag,
        });

        let commercial = commercial_signals(phase, &shape, &normalized, pressure);
        let disc_adapted = persona
            .disc_type
            .map_or(false, |disc| lexicon::disc_adaptation_table(disc).matches(&normalized));

        SignalSet {
            shape,
            intro,
            discovery,
            commercial,
            disc_adapted,
            empty: false,
        }
    }

    fn repeats_previous(&self, open_questions: &[String], last: Option<&str>) -> bool {
        let mut previous = last.map(str::to_owned);
        for question in open_questions {
            if let Some(prev) = &previous {
                if is_repeated_question(
                    question,
                    prev,
                    self.repeat_min_overlap,
                    self.repeat_min_prefix_ratio,
                ) {
                    return true;
                }
            }
            previous = Some(question.clone());
        }
        false
    }
}

fn disc_red_flag(
    disc: Option<DiscType>,
    monologue: bool,
    pressure: bool,
    normalized: &str,
) -> Option<DiscRedFlag> {
    match disc? {
        DiscType::Dominant if monologue => Some(DiscRedFlag::DominantMonologue),
        DiscType::Conscientious
            if lexicon::CERTAINTY_PHRASES.matches(normalized)
                && !lexicon::EVIDENCE_PHRASES.matches(normalized) =>
        {
            Some(DiscRedFlag::ConscientiousUnsupportedCertainty)
        }
        DiscType::Steady if pressure => Some(DiscRedFlag::SteadyPressure),
        _ => None,
    }
}

fn commercial_signals(
    phase: SalesPhase,
    shape: &TextShape,
    normalized: &str,
    pressure: bool,
) -> CommercialSignals {
    let thanks = lexicon::THANKS_PHRASES.matches(normalized);
    if !phase.counts_closing_attempts() {
        return CommercialSignals {
            thanks,
            ..Default::default()
        };
    }

    let value_statements = lexicon::VALUE_PHRASES.hits(normalized) as u32;
    let acknowledged = lexicon::ACKNOWLEDGE_PHRASES.matches(normalized);
    let evidence = lexicon::EVIDENCE_PHRASES.matches(normalized);
    let substantive = shape.open_question_count > 0 || evidence || value_statements > 0;
    let in_objections = phase == SalesPhase::Objections;

    CommercialSignals {
        value_statements,
        objection_handling_attempt: in_objections && (acknowledged || substantive),
        objection_handled_well: in_objections && acknowledged && substantive && !pressure,
        closing_attempt: lexicon::CLOSING_PHRASES.matches(normalized),
        thanks,
    }
}
