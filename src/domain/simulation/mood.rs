//! Mood model: turns a signal set into a bounded mood delta.
//!
//! Two scales are kept. `mood_score` is session-wide and clamped to the
//! configured score range. `mood_level` (1..=5) only matters during the
//! intro, where it drives reply verbosity.

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;

use super::persona::Difficulty;
use super::phase::SalesPhase;
use super::signals::{CommercialSignals, DiscoverySignals, IntroSignals, SignalSet};

/// Tag explaining one contribution to a mood delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodReason {
    ClearAgenda,
    OpenQuestion,
    ExplainedPurpose,
    BeginnerBonus,
    FollowUpReference,
    ImpactExploration,
    SummaryConfirmed,
    ValueStatement,
    ObjectionHandled,

    EarlyPitch,
    Monologue,
    Pressure,
    DiscMismatch,
    ExpertFastPenalty,
    RepeatedQuestion,
    PersonaRedFlag,
    ObjectionDodged,
}

impl MoodReason {
    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            Self::ClearAgenda
                | Self::OpenQuestion
                | Self::ExplainedPurpose
                | Self::BeginnerBonus
                | Self::FollowUpReference
                | Self::ImpactExploration
                | Self::SummaryConfirmed
                | Self::ValueStatement
                | Self::ObjectionHandled
        )
    }

    /// Short client-side description, used in reply reasons.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::ClearAgenda => "jasná agenda",
            Self::OpenQuestion => "otvorená otázka",
            Self::ExplainedPurpose => "vysvetlený účel otázok",
            Self::BeginnerBonus => "dobrý začiatok",
            Self::FollowUpReference => "nadviazanie na moje slová",
            Self::ImpactExploration => "záujem o dopad",
            Self::SummaryConfirmed => "zhrnutie s overením",
            Self::ValueStatement => "konkrétna hodnota",
            Self::ObjectionHandled => "námietka zvládnutá",
            Self::EarlyPitch => "predčasná ponuka",
            Self::Monologue => "dlhý monológ",
            Self::Pressure => "nátlak",
            Self::DiscMismatch => "nevhodný štýl komunikácie",
            Self::ExpertFastPenalty => "príliš rýchly postup",
            Self::RepeatedQuestion => "opakovaná otázka",
            Self::PersonaRedFlag => "štýl mi nesedí",
            Self::ObjectionDodged => "námietka bez odpovede",
        }
    }
}

/// Mood label shown next to every client reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientMood {
    Hostile,
    Skeptical,
    Neutral,
    Interested,
    Enthusiastic,
}

impl ClientMood {
    /// Maps a mood score onto five bands.
    pub fn from_score(score: i32) -> Self {
        match score {
            i32::MIN..=-3 => Self::Hostile,
            -2..=-1 => Self::Skeptical,
            0 => Self::Neutral,
            1..=2 => Self::Interested,
            _ => Self::Enthusiastic,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hostile => "odmietavý",
            Self::Skeptical => "skeptický",
            Self::Neutral => "neutrálny",
            Self::Interested => "zaujatý",
            Self::Enthusiastic => "nadšený",
        }
    }
}

impl std::fmt::Display for ClientMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Human-readable reason built from the tags of the last delta.
pub fn reason_text(reasons: &[MoodReason]) -> String {
    if reasons.is_empty() {
        return "bez zmeny nálady".to_string();
    }
    reasons
        .iter()
        .map(MoodReason::describe)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A delta and the tags that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodDelta {
    pub delta: i32,
    pub reasons: Vec<MoodReason>,
}

/// Computes and applies mood deltas within configured bounds.
#[derive(Debug, Clone, Copy)]
pub struct MoodModel {
    score_min: i32,
    score_max: i32,
    discovery_limit: i32,
    level_min: i32,
    level_max: i32,
}

impl MoodModel {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            score_min: config.mood_score_min,
            score_max: config.mood_score_max,
            discovery_limit: config.discovery_delta_limit,
            level_min: config.mood_level_min,
            level_max: config.mood_level_max,
        }
    }

    /// Delta for one turn in `phase`.
    ///
    /// `gate_passed` is the current phase gate as it stood before the turn.
    pub fn evaluate(
        &self,
        phase: SalesPhase,
        signals: &SignalSet,
        difficulty: Difficulty,
        gate_passed: bool,
    ) -> MoodDelta {
        if signals.is_empty() {
            return MoodDelta::default();
        }
        match phase {
            SalesPhase::Intro => signals
                .intro
                .map(|intro| self.intro_delta(&intro, difficulty))
                .unwrap_or_default(),
            SalesPhase::Discovery => signals
                .discovery
                .map(|d| self.discovery_delta(&d, difficulty, gate_passed))
                .unwrap_or_default(),
            SalesPhase::Presentation | SalesPhase::Objections | SalesPhase::Closing => {
                self.commercial_delta(&signals.commercial)
            }
            SalesPhase::Finished => MoodDelta::default(),
        }
    }

    /// Sign of positives minus negatives plus the difficulty bias, so the
    /// result is always -1, 0 or +1. A turn with no reasons is neutral.
    pub fn intro_delta(&self, intro: &IntroSignals, difficulty: Difficulty) -> MoodDelta {
        let mut reasons = Vec::new();

        if intro.agenda_proposed {
            reasons.push(MoodReason::ClearAgenda);
        }
        if intro.open_question {
            reasons.push(MoodReason::OpenQuestion);
        }
        if intro.purpose_explained {
            reasons.push(MoodReason::ExplainedPurpose);
        }
        if difficulty.is_beginner() && (intro.agenda_proposed || intro.open_question) {
            reasons.push(MoodReason::BeginnerBonus);
        }

        if intro.early_pitch {
            reasons.push(MoodReason::EarlyPitch);
        }
        if intro.long_monologue {
            reasons.push(MoodReason::Monologue);
        }
        if intro.pressure {
            reasons.push(MoodReason::Pressure);
        }
        if intro.disc_mismatch.is_some() {
            reasons.push(MoodReason::DiscMismatch);
        }
        if difficulty.is_expert() && (intro.early_pitch || intro.long_monologue) {
            reasons.push(MoodReason::ExpertFastPenalty);
        }

        if reasons.is_empty() {
            return MoodDelta::default();
        }

        let positives = reasons.iter().filter(|r| r.is_positive()).count() as i32;
        let negatives = reasons.len() as i32 - positives;
        let delta = (positives - negatives + difficulty.mood_bias()).signum();

        MoodDelta { delta, reasons }
    }

    /// Additive points clamped to the discovery limit.
    pub fn discovery_delta(
        &self,
        signals: &DiscoverySignals,
        difficulty: Difficulty,
        gate_passed: bool,
    ) -> MoodDelta {
        let mut delta = 0;
        let mut reasons = Vec::new();
        let mut add = |points: i32, reason: MoodReason| {
            delta += points;
            reasons.push(reason);
        };

        if signals.follow_up_reference {
            add(1, MoodReason::FollowUpReference);
        }
        if signals.impact_exploration {
            add(1, MoodReason::ImpactExploration);
        }
        if signals.purpose_explained {
            add(1, MoodReason::ExplainedPurpose);
        }
        if signals.summary && signals.confirmation {
            add(1, MoodReason::SummaryConfirmed);
        }
        if signals.early_pitch && !gate_passed {
            let penalty = if difficulty.is_expert() { -2 } else { -1 };
            add(penalty, MoodReason::EarlyPitch);
        }
        if signals.repeated_question {
            add(-1, MoodReason::RepeatedQuestion);
        }
        if signals.red_flag.is_some() {
            add(-1, MoodReason::PersonaRedFlag);
        }

        MoodDelta {
            delta: delta.clamp(-self.discovery_limit, self.discovery_limit),
            reasons,
        }
    }

    /// Presentation, objections and closing: value and handled objections
    /// warm the client, an attempted but unconvincing answer cools it.
    pub fn commercial_delta(&self, signals: &CommercialSignals) -> MoodDelta {
        let mut reasons = Vec::new();
        if signals.value_statements > 0 {
            reasons.push(MoodReason::ValueStatement);
        }
        if signals.objection_handled_well {
            reasons.push(MoodReason::ObjectionHandled);
        } else if signals.objection_handling_attempt {
            reasons.push(MoodReason::ObjectionDodged);
        }

        let positives = reasons.iter().filter(|r| r.is_positive()).count() as i32;
        let negatives = reasons.len() as i32 - positives;
        MoodDelta {
            delta: (positives - negatives).clamp(-1, 1),
            reasons,
        }
    }

    pub fn apply_score(&self, score: i32, delta: i32) -> i32 {
        score.saturating_add(delta).clamp(self.score_min, self.score_max)
    }

    pub fn apply_level(&self, level: i32, delta: i32) -> i32 {
        level.saturating_add(delta).clamp(self.level_min, self.level_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::simulation::persona::{ClientCategory, DiscType, PersonaConfig};
    use crate::domain::simulation::signals::{DiscRedFlag, SignalExtractor};

    fn model() -> MoodModel {
        MoodModel::new(&SimulationConfig::default())
    }

    const SCENARIO_OPENING: &str = "Dnes by som chcel jasne stanoviť cieľ. Najprv prejdeme otázky, \
        potom možnosti a na záver ďalší krok. Môžeme takto? Ako dnes vyzerá vaša situácia?";

    const PITCH: &str = "Najprv vám ukážem náš produkt. Potom prejdeme cenu. \
        Ponúkame moderné funkcie. Máme aj demo. Licencia je flexibilná. Zľava platí do konca mesiaca.";

    fn intro_signals(text: &str, difficulty: Difficulty) -> SignalSet {
        let persona = PersonaConfig::new(None, ClientCategory::New, difficulty);
        SignalExtractor::new(&SimulationConfig::default()).extract(
            text,
            SalesPhase::Intro,
            &persona,
            None,
        )
    }

    mod intro {
        use super::*;

        #[test]
        fn structured_opening_is_positive() {
            let signals = intro_signals(SCENARIO_OPENING, Difficulty::Beginner);
            let delta = model().evaluate(SalesPhase::Intro, &signals, Difficulty::Beginner, false);
            assert_eq!(delta.delta, 1);
            assert!(delta.reasons.contains(&MoodReason::ClearAgenda));
            assert!(delta.reasons.contains(&MoodReason::BeginnerBonus));
        }

        #[test]
        fn pitch_hurts_expert_more_than_beginner() {
            let beginner = model().evaluate(
                SalesPhase::Intro,
                &intro_signals(PITCH, Difficulty::Beginner),
                Difficulty::Beginner,
                false,
            );
            let expert = model().evaluate(
                SalesPhase::Intro,
                &intro_signals(PITCH, Difficulty::Expert),
                Difficulty::Expert,
                false,
            );
            assert_eq!(beginner.delta, 1);
            assert_eq!(expert.delta, -1);
            assert!(expert.reasons.contains(&MoodReason::ExpertFastPenalty));
            assert!(!beginner.reasons.contains(&MoodReason::ExpertFastPenalty));
        }

        #[test]
        fn expert_rewards_a_clean_opening() {
            let clean = IntroSignals {
                agenda_proposed: true,
                open_question: true,
                purpose_explained: true,
                ..Default::default()
            };
            assert_eq!(model().intro_delta(&clean, Difficulty::Expert).delta, 1);
        }

        #[test]
        fn beginner_still_notices_pitch_and_monologue() {
            let rushed = IntroSignals {
                early_pitch: true,
                long_monologue: true,
                ..Default::default()
            };
            assert_eq!(model().intro_delta(&rushed, Difficulty::Beginner).delta, -1);
        }

        #[test]
        fn bias_breaks_a_tie() {
            let mixed = IntroSignals {
                agenda_proposed: true,
                pressure: true,
                ..Default::default()
            };
            assert_eq!(model().intro_delta(&mixed, Difficulty::Advanced).delta, 0);
            assert_eq!(model().intro_delta(&mixed, Difficulty::Expert).delta, -1);
        }

        #[test]
        fn no_reasons_means_no_change() {
            let delta = model().intro_delta(&IntroSignals::default(), Difficulty::Beginner);
            assert_eq!(delta, MoodDelta::default());
        }

        #[test]
        fn delta_stays_within_unit_range() {
            let all_bad = IntroSignals {
                early_pitch: true,
                long_monologue: true,
                pressure: true,
                disc_mismatch: Some(DiscRedFlag::SteadyPressure),
                ..Default::default()
            };
            assert_eq!(model().intro_delta(&all_bad, Difficulty::Expert).delta, -1);
        }
    }

    mod discovery {
        use super::*;

        #[test]
        fn adds_points_per_signal() {
            let signals = DiscoverySignals {
                follow_up_reference: true,
                impact_exploration: true,
                summary: true,
                confirmation: true,
                ..Default::default()
            };
            let delta = model().discovery_delta(&signals, Difficulty::Advanced, false);
            assert_eq!(delta.delta, 3);
            assert!(delta.reasons.contains(&MoodReason::SummaryConfirmed));
        }

        #[test]
        fn summary_without_confirmation_earns_nothing() {
            let signals = DiscoverySignals {
                summary: true,
                ..Default::default()
            };
            assert_eq!(model().discovery_delta(&signals, Difficulty::Advanced, false).delta, 0);
        }

        #[test]
        fn clamps_to_limit() {
            let signals = DiscoverySignals {
                follow_up_reference: true,
                impact_exploration: true,
                purpose_explained: true,
                summary: true,
                confirmation: true,
                ..Default::default()
            };
            assert_eq!(model().discovery_delta(&signals, Difficulty::Beginner, false).delta, 3);
        }

        #[test]
        fn expert_early_pitch_costs_two() {
            let signals = DiscoverySignals {
                early_pitch: true,
                ..Default::default()
            };
            assert_eq!(model().discovery_delta(&signals, Difficulty::Expert, false).delta, -2);
            assert_eq!(model().discovery_delta(&signals, Difficulty::Advanced, false).delta, -1);
        }

        #[test]
        fn early_pitch_after_gate_is_free() {
            let signals = DiscoverySignals {
                early_pitch: true,
                ..Default::default()
            };
            assert_eq!(model().discovery_delta(&signals, Difficulty::Expert, true).delta, 0);
        }

        #[test]
        fn repeated_question_and_red_flag_each_cost_one() {
            let signals = DiscoverySignals {
                repeated_question: true,
                red_flag: Some(DiscRedFlag::DominantMonologue),
                ..Default::default()
            };
            let delta = model().discovery_delta(&signals, Difficulty::Beginner, false);
            assert_eq!(delta.delta, -2);
            assert_eq!(
                delta.reasons,
                vec![MoodReason::RepeatedQuestion, MoodReason::PersonaRedFlag]
            );
        }

        #[test]
        fn dominant_monologue_in_discovery() {
            let persona = PersonaConfig::new(
                Some(DiscType::Dominant),
                ClientCategory::New,
                Difficulty::Advanced,
            );
            let signals = SignalExtractor::new(&SimulationConfig::default()).extract(
                PITCH,
                SalesPhase::Discovery,
                &persona,
                None,
            );
            let delta = model().evaluate(SalesPhase::Discovery, &signals, Difficulty::Advanced, false);
            assert_eq!(delta.delta, -2);
        }
    }

    mod commercial {
        use super::*;

        #[test]
        fn handled_objection_warms_client() {
            let signals = CommercialSignals {
                objection_handling_attempt: true,
                objection_handled_well: true,
                ..Default::default()
            };
            assert_eq!(model().commercial_delta(&signals).delta, 1);
        }

        #[test]
        fn dodged_objection_cools_client() {
            let signals = CommercialSignals {
                objection_handling_attempt: true,
                ..Default::default()
            };
            let delta = model().commercial_delta(&signals);
            assert_eq!(delta.delta, -1);
            assert_eq!(delta.reasons, vec![MoodReason::ObjectionDodged]);
        }
    }

    mod bounds {
        use super::*;

        #[test]
        fn score_is_clamped() {
            assert_eq!(model().apply_score(5, 1), 5);
            assert_eq!(model().apply_score(-5, -3), -5);
            assert_eq!(model().apply_score(0, 2), 2);
        }

        #[test]
        fn level_is_clamped() {
            assert_eq!(model().apply_level(5, 1), 5);
            assert_eq!(model().apply_level(1, -1), 1);
        }

        #[test]
        fn empty_signals_leave_mood_alone() {
            let delta = model().evaluate(
                SalesPhase::Intro,
                &SignalSet::empty(),
                Difficulty::Expert,
                false,
            );
            assert_eq!(delta, MoodDelta::default());
        }
    }

    mod labels {
        use super::*;

        #[test]
        fn bands_cover_the_score_range() {
            assert_eq!(ClientMood::from_score(-5), ClientMood::Hostile);
            assert_eq!(ClientMood::from_score(-1), ClientMood::Skeptical);
            assert_eq!(ClientMood::from_score(0), ClientMood::Neutral);
            assert_eq!(ClientMood::from_score(2), ClientMood::Interested);
            assert_eq!(ClientMood::from_score(5), ClientMood::Enthusiastic);
        }

        #[test]
        fn reason_text_joins_descriptions() {
            let text = reason_text(&[MoodReason::OpenQuestion, MoodReason::Pressure]);
            assert_eq!(text, "otvorená otázka, nátlak");
            assert_eq!(reason_text(&[]), "bez zmeny nálady");
        }
    }
}
