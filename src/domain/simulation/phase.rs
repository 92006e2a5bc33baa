//! Sales conversation phases.
//!
//! Phases move forward only. The single exception is the
//! Presentation ⇄ Objections loop, which lets the client raise an objection
//! and the trainee return to presenting after handling it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The phase a simulated sales conversation is in.
///
/// Deserialization is lenient: any unrecognised value becomes `Intro`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SalesPhase {
    /// Opening: goal, agenda, consent and first diagnostic question.
    #[default]
    Intro,

    /// Needs analysis. Counters for this phase are keyed as `needs`.
    Discovery,

    /// Trainee presents value tied to discovered needs.
    Presentation,

    /// Client raises an objection the trainee has to handle.
    Objections,

    /// Trainee asks for a commitment or next step.
    Closing,

    /// Terminal. Further turns leave the phase unchanged.
    Finished,
}

impl SalesPhase {
    /// All phases in conversation order.
    pub const ALL: [SalesPhase; 6] = [
        SalesPhase::Intro,
        SalesPhase::Discovery,
        SalesPhase::Presentation,
        SalesPhase::Objections,
        SalesPhase::Closing,
        SalesPhase::Finished,
    ];

    /// Parses a phase name, falling back to `Intro` for anything unknown.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "intro" => Self::Intro,
            "discovery" | "needs" => Self::Discovery,
            "presentation" => Self::Presentation,
            "objections" | "objection" => Self::Objections,
            "closing" => Self::Closing,
            "finished" | "done" => Self::Finished,
            _ => Self::Intro,
        }
    }

    /// Short label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Intro => "Úvod",
            Self::Discovery => "Zisťovanie potrieb",
            Self::Presentation => "Prezentácia",
            Self::Objections => "Námietky",
            Self::Closing => "Uzatváranie",
            Self::Finished => "Ukončené",
        }
    }

    /// Returns true if trainee turns are still evaluated in this phase.
    pub fn accepts_turns(&self) -> bool {
        !matches!(self, Self::Finished)
    }

    /// Returns true if closing attempts are counted in this phase.
    pub fn counts_closing_attempts(&self) -> bool {
        matches!(self, Self::Presentation | Self::Objections | Self::Closing)
    }
}

impl From<String> for SalesPhase {
    fn from(raw: String) -> Self {
        Self::parse_lenient(&raw)
    }
}

impl std::fmt::Display for SalesPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Intro => "intro",
            Self::Discovery => "discovery",
            Self::Presentation => "presentation",
            Self::Objections => "objections",
            Self::Closing => "closing",
            Self::Finished => "finished",
        };
        write!(f, "{}", s)
    }
}

impl StateMachine for SalesPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SalesPhase::*;
        matches!(
            (self, target),
            (Intro, Discovery)
                | (Discovery, Presentation)
                | (Presentation, Objections)
                | (Presentation, Closing)
                | (Objections, Presentation)
                | (Objections, Closing)
                | (Closing, Finished)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SalesPhase::*;
        match self {
            Intro => vec![Discovery],
            Discovery => vec![Presentation],
            Presentation => vec![Objections, Closing],
            Objections => vec![Presentation, Closing],
            Closing => vec![Finished],
            Finished => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod serde_behaviour {
        use super::*;

        #[test]
        fn serializes_to_snake_case() {
            let json = serde_json::to_string(&SalesPhase::Objections).unwrap();
            assert_eq!(json, "\"objections\"");
        }

        #[test]
        fn deserializes_known_phase() {
            let phase: SalesPhase = serde_json::from_str("\"closing\"").unwrap();
            assert_eq!(phase, SalesPhase::Closing);
        }

        #[test]
        fn needs_is_an_alias_for_discovery() {
            let phase: SalesPhase = serde_json::from_str("\"needs\"").unwrap();
            assert_eq!(phase, SalesPhase::Discovery);
        }

        #[test]
        fn unknown_phase_falls_back_to_intro() {
            let phase: SalesPhase = serde_json::from_str("\"negotiation\"").unwrap();
            assert_eq!(phase, SalesPhase::Intro);
        }

        #[test]
        fn display_round_trips_through_parse() {
            for phase in SalesPhase::ALL {
                assert_eq!(SalesPhase::parse_lenient(&phase.to_string()), phase);
            }
        }
    }

    mod transitions {
        use super::*;

        #[test]
        fn only_presentation_and_objections_loop() {
            for from in SalesPhase::ALL {
                for to in SalesPhase::ALL {
                    let backwards = SalesPhase::ALL.iter().position(|p| *p == to)
                        < SalesPhase::ALL.iter().position(|p| *p == from);
                    if backwards && from.can_transition_to(&to) {
                        assert_eq!((from, to), (SalesPhase::Objections, SalesPhase::Presentation));
                    }
                }
            }
        }

        #[test]
        fn finished_is_terminal() {
            assert!(SalesPhase::Finished.is_terminal());
            assert!(!SalesPhase::Finished.accepts_turns());
        }

        #[test]
        fn cannot_skip_discovery() {
            assert!(SalesPhase::Intro.transition_to(SalesPhase::Presentation).is_err());
        }

        #[test]
        fn valid_transitions_matches_can_transition_to() {
            for phase in SalesPhase::ALL {
                for target in phase.valid_transitions() {
                    assert!(phase.can_transition_to(&target));
                }
            }
        }

        #[test]
        fn all_phases_have_labels() {
            for phase in SalesPhase::ALL {
                assert!(!phase.label().is_empty());
            }
        }
    }
}
