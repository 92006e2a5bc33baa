//! Turn simulator: one trainee message in, next session state and client
//! reply out.
//!
//! Data flows extractor → {mood, counters, gate} → transition engine →
//! reply generator. The simulator holds no session state of its own.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SimulationConfig;
use crate::domain::analysis::{FeedbackReport, FeedbackSynthesizer};
use crate::ports::RandomSource;

use super::engine::{TransitionEngine, TurnTriggers};
use super::gate::{PhaseGate, PhaseGateResult};
use super::metrics::{Metrics, PhaseCounters};
use super::mood::{ClientMood, MoodModel, MoodReason};
use super::persona::PersonaConfig;
use super::phase::SalesPhase;
use super::replies::{ClientReply, ReplyContext, ReplyGenerator};
use super::session::SessionState;
use super::signals::SignalExtractor;

/// Everything a caller needs after one trainee turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The state to persist for the next turn.
    pub state: SessionState,
    pub next_phase: SalesPhase,
    pub client_message: String,
    pub client_mood: ClientMood,
    pub mood_reason: String,
    pub mood_score: i32,
    pub mood_reasons: Vec<MoodReason>,
    pub metrics: Metrics,
    pub phase_counters: PhaseCounters,
    pub phase_gate_result: PhaseGateResult,
    pub should_end: bool,
    /// Present once the session has ended.
    pub feedback: Option<FeedbackReport>,
}

impl TurnOutcome {
    fn new(
        state: SessionState,
        reply: ClientReply,
        gate: PhaseGateResult,
        feedback: Option<FeedbackReport>,
    ) -> Self {
        Self {
            next_phase: state.phase,
            client_message: reply.text,
            client_mood: reply.mood,
            mood_reason: reply.reason,
            mood_score: state.mood_score,
            mood_reasons: state.mood_reasons.clone(),
            metrics: state.metrics,
            phase_counters: state.phase_counters.clone(),
            phase_gate_result: gate,
            should_end: feedback.is_some(),
            feedback,
            state,
        }
    }
}

/// Wires the engine components together from one configuration.
#[derive(Debug, Clone)]
pub struct TurnSimulator {
    config: SimulationConfig,
    extractor: SignalExtractor,
    mood: MoodModel,
    gate: PhaseGate,
    engine: TransitionEngine,
    replies: ReplyGenerator,
}

impl TurnSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            extractor: SignalExtractor::new(&config),
            mood: MoodModel::new(&config),
            gate: PhaseGate::new(&config),
            engine: TransitionEngine::new(&config),
            replies: ReplyGenerator::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Fresh session and the client's opening line.
    pub fn start(&self, persona: PersonaConfig) -> (SessionState, ClientReply) {
        let state = SessionState::new(persona, &self.config);
        let greeting = self.replies.greeting(&state.persona, state.mood_score);
        (state, greeting)
    }

    /// Evaluates one trainee turn against `prior`.
    ///
    /// `persona` comes from the request layer and replaces whatever persona
    /// the stored state carried once the turn is evaluated. Empty text and
    /// finished sessions leave the state untouched, persona included.
    pub fn step(
        &self,
        prior: &SessionState,
        text: &str,
        persona: &PersonaConfig,
        rng: &mut dyn RandomSource,
    ) -> TurnOutcome {
        let mut state = prior.clone().sanitized(&self.config);
        let phase = state.phase;
        let pre_gate = self
            .gate
            .evaluate(phase, &state.intro_flags, &state.phase_counters);

        if !phase.accepts_turns() {
            let reply = self.replies.waiting(phase, state.mood_score);
            let feedback = FeedbackSynthesizer::synthesize(&state);
            return TurnOutcome::new(state, reply, pre_gate, Some(feedback));
        }

        let signals = self.extractor.extract(
            text,
            phase,
            persona,
            state.phase_counters.needs.last_open_question.as_deref(),
        );
        if signals.is_empty() {
            let reply = self.replies.waiting(phase, state.mood_score);
            return TurnOutcome::new(state, reply, pre_gate, None);
        }

        state.persona = *persona;
        state.metrics = state.metrics.accrue(&signals);
        if let Some(intro) = &signals.intro {
            state.intro_flags = state.intro_flags.merge(intro);
        }
        state.phase_counters = state.phase_counters.fold(phase, &signals);

        let delta = self
            .mood
            .evaluate(phase, &signals, persona.difficulty, pre_gate.passed);
        state.mood_score = self.mood.apply_score(state.mood_score, delta.delta);
        if phase == SalesPhase::Intro {
            state.mood_level = self.mood.apply_level(state.mood_level, delta.delta);
        }
        state.mood_reasons = delta.reasons;

        let gate = self
            .gate
            .evaluate(phase, &state.intro_flags, &state.phase_counters);
        let next = self.engine.next_phase(
            phase,
            &gate,
            &state.metrics,
            TurnTriggers {
                thanks: signals.commercial.thanks,
            },
            rng,
        );
        state.phase = next;
        state.turn_count = state.turn_count.saturating_add(1);

        debug!(
            phase = %phase,
            next_phase = %next,
            mood_delta = delta.delta,
            mood_score = state.mood_score,
            gate_passed = gate.passed,
            unmet = gate.reasons.len(),
            "Turn evaluated"
        );

        let reply = self.replies.generate(
            ReplyContext {
                phase: next,
                persona,
                mood_score: state.mood_score,
                mood_level: state.mood_level,
                reasons: &state.mood_reasons,
            },
            rng,
        );
        let feedback = state
            .is_finished()
            .then(|| FeedbackSynthesizer::synthesize(&state));

        TurnOutcome::new(state, reply, gate, feedback)
    }

    /// Report for a session the trainee ends early.
    pub fn finish(&self, state: &SessionState) -> FeedbackReport {
        FeedbackSynthesizer::synthesize(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::simulation::persona::{ClientCategory, Difficulty};

    struct Always(f64);

    impl RandomSource for Always {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    fn simulator() -> TurnSimulator {
        TurnSimulator::new(SimulationConfig::default())
    }

    const OPENING: &str = "Dnes by som chcel jasne stanoviť cieľ. Najprv prejdeme otázky, \
        potom možnosti a na záver ďalší krok. Môžeme takto? Ako dnes vyzerá vaša situácia?";

    #[test]
    fn structured_opening_moves_to_discovery() {
        let sim = simulator();
        let persona = PersonaConfig::default();
        let (state, _) = sim.start(persona);
        let outcome = sim.step(&state, OPENING, &persona, &mut Always(0.9));

        assert_eq!(outcome.next_phase, SalesPhase::Discovery);
        assert!(outcome.phase_gate_result.passed);
        assert_eq!(outcome.mood_score, 1);
        assert!(outcome.state.intro_flags.goal_framed);
        assert!(outcome.state.intro_flags.diagnostic_started);
        assert!(!outcome.should_end);
        assert!(outcome.feedback.is_none());
    }

    #[test]
    fn empty_text_changes_nothing() {
        let sim = simulator();
        let persona = PersonaConfig::default();
        let (state, _) = sim.start(persona);
        let outcome = sim.step(&state, "  ", &persona, &mut Always(0.0));
        assert_eq!(outcome.state, state);
        assert_eq!(outcome.client_message, "Počúvam vás.");
    }

    #[test]
    fn unmet_intro_gate_lists_reasons() {
        let sim = simulator();
        let persona = PersonaConfig::default();
        let (state, _) = sim.start(persona);
        let outcome = sim.step(&state, "Dobrý deň.", &persona, &mut Always(0.9));
        assert_eq!(outcome.next_phase, SalesPhase::Intro);
        assert!(!outcome.phase_gate_result.passed);
        assert!(outcome.phase_gate_result.reasons.len() >= 4);
    }

    #[test]
    fn closing_with_thanks_ends_with_feedback() {
        let sim = simulator();
        let persona = PersonaConfig::new(None, ClientCategory::Repeat, Difficulty::Advanced);
        let state = SessionState {
            phase: SalesPhase::Closing,
            metrics: Metrics {
                closing_attempts: 1,
                ..Default::default()
            },
            ..SessionState::new(persona, sim.config())
        };
        let outcome = sim.step(&state, "Ďakujem, dovidenia.", &persona, &mut Always(0.9));
        assert_eq!(outcome.next_phase, SalesPhase::Finished);
        assert!(outcome.should_end);
        assert_eq!(outcome.feedback.map(|f| f.dimensions.len()), Some(7));
    }

    #[test]
    fn finished_session_stays_finished() {
        let sim = simulator();
        let persona = PersonaConfig::default();
        let state = SessionState {
            phase: SalesPhase::Finished,
            ..SessionState::default()
        };
        let outcome = sim.step(&state, "Ešte jedna otázka?", &persona, &mut Always(0.0));
        assert_eq!(outcome.next_phase, SalesPhase::Finished);
        assert!(outcome.should_end);
        assert_eq!(outcome.state.metrics, Metrics::default());
    }

    #[test]
    fn persona_from_request_replaces_stored_persona() {
        let sim = simulator();
        let (state, _) = sim.start(PersonaConfig::default());
        let expert = PersonaConfig::new(None, ClientCategory::New, Difficulty::Expert);
        let outcome = sim.step(&state, "Dobrý deň.", &expert, &mut Always(0.9));
        assert_eq!(outcome.state.persona, expert);
    }

    #[test]
    fn out_of_range_stored_mood_is_clamped() {
        let sim = simulator();
        let persona = PersonaConfig::default();
        let state = SessionState {
            mood_score: 99,
            ..SessionState::default()
        };
        let outcome = sim.step(&state, OPENING, &persona, &mut Always(0.9));
        assert_eq!(outcome.mood_score, 5);
    }

    #[test]
    fn empty_text_keeps_stored_persona() {
        let sim = simulator();
        let (state, _) = sim.start(PersonaConfig::default());
        let expert = PersonaConfig::new(None, ClientCategory::New, Difficulty::Expert);
        let outcome = sim.step(&state, " \n\t", &expert, &mut Always(0.9));
        assert_eq!(outcome.state, state);
    }

    mod mood_level {
        use super::*;

        #[test]
        fn expert_intro_turn_raises_level_by_one() {
            let sim = simulator();
            let expert = PersonaConfig::new(None, ClientCategory::New, Difficulty::Expert);
            let (state, _) = sim.start(expert);
            assert_eq!(state.mood_level, 2);

            let outcome = sim.step(&state, OPENING, &expert, &mut Always(0.9));

            assert_eq!(outcome.state.mood_level, 3);
            assert_eq!(outcome.mood_score, 1);
        }

        #[test]
        fn rushed_intro_turn_lowers_level_by_one() {
            let sim = simulator();
            let persona = PersonaConfig::new(None, ClientCategory::New, Difficulty::Advanced);
            let (state, _) = sim.start(persona);
            let pitch = "Náš produkt je najlepší na trhu. Musíte sa rozhodnúť hneď.";

            let outcome = sim.step(&state, pitch, &persona, &mut Always(0.9));

            assert_eq!(outcome.state.mood_level, state.mood_level - 1);
        }

        #[test]
        fn discovery_turn_moves_score_but_not_level() {
            let sim = simulator();
            let persona = PersonaConfig::new(None, ClientCategory::New, Difficulty::Advanced);
            let state = SessionState {
                phase: SalesPhase::Discovery,
                ..SessionState::new(persona, sim.config())
            };
            let text = "Spomínali ste meškania. Aký dopad to má na vašich zákazníkov?";

            let outcome = sim.step(&state, text, &persona, &mut Always(0.9));

            assert!(outcome.mood_score > state.mood_score);
            assert_eq!(outcome.state.mood_level, state.mood_level);
        }
    }
}
