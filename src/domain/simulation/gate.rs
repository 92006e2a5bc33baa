//! Phase gates: conjunctive readiness checks for leaving Intro and
//! Discovery.
//!
//! Evaluation never short-circuits. Every unmet condition is reported so
//! the trainee can see the whole list at once.

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;

use super::metrics::{IntroFlags, PhaseCounters};
use super::phase::SalesPhase;

/// One condition a gate requires but the session has not yet met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "condition", rename_all = "snake_case")]
pub enum UnmetCondition {
    GoalNotFramed,
    AgendaNotProposed,
    NoOpenQuestionAsked,
    ConsentNotObtained,
    TooFewQuestions { required: u32, actual: u32 },
    TooFewOpenQuestions { required: u32, actual: u32 },
    EarlyPitch,
    LongMonologue,
    TooFewNeeds { required: u32, actual: u32 },
    ImpactNotExplored,
    SummaryMissing,
    ConfirmationMissing,
}

impl UnmetCondition {
    /// Trainee-facing hint.
    pub fn hint(&self) -> String {
        match self {
            Self::GoalNotFramed => "Pomenujte cieľ stretnutia.".to_string(),
            Self::AgendaNotProposed => "Navrhnite postup alebo agendu rozhovoru.".to_string(),
            Self::NoOpenQuestionAsked => "Položte aspoň jednu otvorenú otázku.".to_string(),
            Self::ConsentNotObtained => "Overte si, či klient s postupom súhlasí.".to_string(),
            Self::TooFewQuestions { required, actual } => {
                format!("Položte viac otázok ({actual} z {required}).")
            }
            Self::TooFewOpenQuestions { required, actual } => {
                format!("Položte viac otvorených otázok ({actual} z {required}).")
            }
            Self::EarlyPitch => "Neponúkajte produkt skôr, než poznáte potreby.".to_string(),
            Self::LongMonologue => "Nerozprávajte dlho bez otázky.".to_string(),
            Self::TooFewNeeds { required, actual } => {
                format!("Identifikujte viac potrieb ({actual} z {required}).")
            }
            Self::ImpactNotExplored => "Zistite, aký dopad má problém na klienta.".to_string(),
            Self::SummaryMissing => "Zhrňte, čo ste sa dozvedeli.".to_string(),
            Self::ConfirmationMissing => "Nechajte si zhrnutie potvrdiť.".to_string(),
        }
    }
}

/// Outcome of a gate evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseGateResult {
    pub passed: bool,
    pub reasons: Vec<UnmetCondition>,
}

impl PhaseGateResult {
    pub fn from_reasons(reasons: Vec<UnmetCondition>) -> Self {
        Self {
            passed: reasons.is_empty(),
            reasons,
        }
    }

    /// Result for phases that have no gate.
    pub fn open() -> Self {
        Self::from_reasons(Vec::new())
    }

    pub fn hints(&self) -> Vec<String> {
        self.reasons.iter().map(UnmetCondition::hint).collect()
    }
}

impl Default for PhaseGateResult {
    fn default() -> Self {
        Self::open()
    }
}

/// Gate thresholds taken from configuration.
#[derive(Debug, Clone, Copy)]
pub struct PhaseGate {
    intro_min_questions: u32,
    intro_min_open_questions: u32,
    needs_min_questions: u32,
    needs_min_open_questions: u32,
    needs_min_identified: u32,
}

impl PhaseGate {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            intro_min_questions: config.intro_min_questions,
            intro_min_open_questions: config.intro_min_open_questions,
            needs_min_questions: config.needs_min_questions,
            needs_min_open_questions: config.needs_min_open_questions,
            needs_min_identified: config.needs_min_identified,
        }
    }

    /// Evaluates the gate guarding the exit from `phase`.
    ///
    /// Phases after Discovery advance on triggers, not gates, and always
    /// report an open gate.
    pub fn evaluate(
        &self,
        phase: SalesPhase,
        flags: &IntroFlags,
        counters: &PhaseCounters,
    ) -> PhaseGateResult {
        match phase {
            SalesPhase::Intro => self.intro(flags, counters),
            SalesPhase::Discovery => self.needs(counters),
            _ => PhaseGateResult::open(),
        }
    }

    pub fn intro(&self, flags: &IntroFlags, counters: &PhaseCounters) -> PhaseGateResult {
        let mut reasons = Vec::new();

        if !flags.goal_framed {
            reasons.push(UnmetCondition::GoalNotFramed);
        }
        if !flags.agenda_proposed {
            reasons.push(UnmetCondition::AgendaNotProposed);
        }
        if !flags.diagnostic_started {
            reasons.push(UnmetCondition::NoOpenQuestionAsked);
        }
        if !flags.consent_obtained {
            reasons.push(UnmetCondition::ConsentNotObtained);
        }
        if counters.intro.questions_asked < self.intro_min_questions {
            reasons.push(UnmetCondition::TooFewQuestions {
                required: self.intro_min_questions,
                actual: counters.intro.questions_asked,
            });
        }
        if counters.intro.open_questions < self.intro_min_open_questions {
            reasons.push(UnmetCondition::TooFewOpenQuestions {
                required: self.intro_min_open_questions,
                actual: counters.intro.open_questions,
            });
        }
        if flags.early_pitch {
            reasons.push(UnmetCondition::EarlyPitch);
        }
        if flags.long_monologue {
            reasons.push(UnmetCondition::LongMonologue);
        }

        PhaseGateResult::from_reasons(reasons)
    }

    pub fn needs(&self, counters: &PhaseCounters) -> PhaseGateResult {
        let needs = &counters.needs;
        let mut reasons = Vec::new();

        if needs.asked_questions < self.needs_min_questions {
            reasons.push(UnmetCondition::TooFewQuestions {
                required: self.needs_min_questions,
                actual: needs.asked_questions,
            });
        }
        if needs.open_questions < self.needs_min_open_questions {
            reasons.push(UnmetCondition::TooFewOpenQuestions {
                required: self.needs_min_open_questions,
                actual: needs.open_questions,
            });
        }
        if needs.identified_needs < self.needs_min_identified {
            reasons.push(UnmetCondition::TooFewNeeds {
                required: self.needs_min_identified,
                actual: needs.identified_needs,
            });
        }
        if !needs.impact_found {
            reasons.push(UnmetCondition::ImpactNotExplored);
        }
        if !needs.summary_found {
            reasons.push(UnmetCondition::SummaryMissing);
        }
        if !needs.confirm_found {
            reasons.push(UnmetCondition::ConfirmationMissing);
        }
        if needs.early_pitch {
            reasons.push(UnmetCondition::EarlyPitch);
        }

        PhaseGateResult::from_reasons(reasons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::simulation::metrics::{IntroCounters, NeedsCounters};

    fn gate() -> PhaseGate {
        PhaseGate::new(&SimulationConfig::default())
    }

    fn ready_intro_counters() -> PhaseCounters {
        PhaseCounters {
            intro: IntroCounters {
                questions_asked: 1,
                open_questions: 1,
            },
            ..Default::default()
        }
    }

    fn ready_needs_counters() -> PhaseCounters {
        PhaseCounters {
            needs: NeedsCounters {
                asked_questions: 5,
                open_questions: 3,
                identified_needs: 2,
                impact_found: true,
                summary_found: true,
                confirm_found: true,
                early_pitch: false,
                last_open_question: None,
            },
            ..Default::default()
        }
    }

    mod intro {
        use super::*;

        fn flags(bits: u8) -> IntroFlags {
            IntroFlags {
                goal_framed: bits & 1 != 0,
                agenda_proposed: bits & 2 != 0,
                diagnostic_started: bits & 4 != 0,
                consent_obtained: bits & 8 != 0,
                early_pitch: bits & 16 != 0,
                long_monologue: bits & 32 != 0,
                purpose_explained: false,
            }
        }

        #[test]
        fn truth_table_over_all_flag_combinations() {
            let counters = ready_intro_counters();
            for bits in 0u8..64 {
                let expected = bits & 0b1111 == 0b1111 && bits & 0b110000 == 0;
                let result = gate().intro(&flags(bits), &counters);
                assert_eq!(result.passed, expected, "flags {bits:06b}");
                assert_eq!(result.passed, result.reasons.is_empty());
            }
        }

        #[test]
        fn flipping_any_flag_closes_an_open_gate() {
            let counters = ready_intro_counters();
            let open = 0b001111u8;
            assert!(gate().intro(&flags(open), &counters).passed);
            for bit in 0..6 {
                let flipped = open ^ (1 << bit);
                assert!(!gate().intro(&flags(flipped), &counters).passed);
            }
        }

        #[test]
        fn reports_every_unmet_condition() {
            let result = gate().intro(&IntroFlags::default(), &PhaseCounters::default());
            assert_eq!(
                result.reasons,
                vec![
                    UnmetCondition::GoalNotFramed,
                    UnmetCondition::AgendaNotProposed,
                    UnmetCondition::NoOpenQuestionAsked,
                    UnmetCondition::ConsentNotObtained,
                    UnmetCondition::TooFewQuestions {
                        required: 1,
                        actual: 0
                    },
                    UnmetCondition::TooFewOpenQuestions {
                        required: 1,
                        actual: 0
                    },
                ]
            );
        }

        #[test]
        fn flags_without_counters_do_not_pass() {
            let result = gate().intro(&flags(0b001111), &PhaseCounters::default());
            assert!(!result.passed);
            assert_eq!(result.reasons.len(), 2);
        }
    }

    mod needs {
        use super::*;

        #[test]
        fn all_thresholds_met_passes() {
            assert!(gate().needs(&ready_needs_counters()).passed);
        }

        #[test]
        fn each_counter_below_threshold_fails_alone() {
            let cases: [(fn(&mut NeedsCounters), UnmetCondition); 7] = [
                (
                    |n| n.asked_questions = 4,
                    UnmetCondition::TooFewQuestions {
                        required: 5,
                        actual: 4,
                    },
                ),
                (
                    |n| n.open_questions = 2,
                    UnmetCondition::TooFewOpenQuestions {
                        required: 3,
                        actual: 2,
                    },
                ),
                (
                    |n| n.identified_needs = 1,
                    UnmetCondition::TooFewNeeds {
                        required: 2,
                        actual: 1,
                    },
                ),
                (|n| n.impact_found = false, UnmetCondition::ImpactNotExplored),
                (|n| n.summary_found = false, UnmetCondition::SummaryMissing),
                (|n| n.confirm_found = false, UnmetCondition::ConfirmationMissing),
                (|n| n.early_pitch = true, UnmetCondition::EarlyPitch),
            ];

            for (break_it, expected) in cases {
                let mut counters = ready_needs_counters();
                break_it(&mut counters.needs);
                let result = gate().needs(&counters);
                assert!(!result.passed);
                assert_eq!(result.reasons, vec![expected]);
            }
        }

        #[test]
        fn empty_counters_list_six_reasons() {
            let result = gate().needs(&PhaseCounters::default());
            assert_eq!(result.reasons.len(), 6);
        }
    }

    mod other_phases {
        use super::*;

        #[test]
        fn later_phases_have_no_gate() {
            for phase in [SalesPhase::Presentation, SalesPhase::Objections, SalesPhase::Closing] {
                let result =
                    gate().evaluate(phase, &IntroFlags::default(), &PhaseCounters::default());
                assert!(result.passed);
            }
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn conditions_serialize_with_tag() {
            let json = serde_json::to_value(UnmetCondition::TooFewNeeds {
                required: 2,
                actual: 0,
            })
            .unwrap();
            assert_eq!(json["condition"], "too_few_needs");
            assert_eq!(json["required"], 2);
        }

        #[test]
        fn hints_are_available_for_every_reason() {
            let result = gate().needs(&PhaseCounters::default());
            assert!(result.hints().iter().all(|h| !h.is_empty()));
            assert!(result.hints()[0].contains("0 z 5"));
        }
    }
}
