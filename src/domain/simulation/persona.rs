//! Persona of the simulated client.
//!
//! Persona fields arrive from the request layer and may be partial or
//! malformed. Every field deserializes leniently to a safe default:
//! difficulty `beginner`, client category `new`, no DISC profile.

use serde::{Deserialize, Deserializer, Serialize};

/// DISC behavioural archetype of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscType {
    /// Results-driven, impatient with long talk.
    #[serde(rename = "D")]
    Dominant,
    /// Enthusiastic, relationship-oriented.
    #[serde(rename = "I")]
    Influential,
    /// Calm, security-seeking, averse to pressure.
    #[serde(rename = "S")]
    Steady,
    /// Analytical, wants evidence.
    #[serde(rename = "C")]
    Conscientious,
}

impl DiscType {
    pub const ALL: [DiscType; 4] = [
        DiscType::Dominant,
        DiscType::Influential,
        DiscType::Steady,
        DiscType::Conscientious,
    ];

    /// Parses a DISC letter or full name; `None` for anything else.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "d" | "dominant" => Some(Self::Dominant),
            "i" | "influential" | "influencer" => Some(Self::Influential),
            "s" | "steady" | "stable" | "stability" => Some(Self::Steady),
            "c" | "conscientious" | "compliant" | "analytical" => Some(Self::Conscientious),
            _ => None,
        }
    }
}

/// Whether the trainee has met this client before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ClientCategory {
    #[default]
    New,
    Repeat,
}

impl ClientCategory {
    pub fn is_repeat(&self) -> bool {
        matches!(self, Self::Repeat)
    }
}

impl From<String> for ClientCategory {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "repeat" | "returning" | "existing" => Self::Repeat,
            _ => Self::New,
        }
    }
}

/// Training difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Difficulty {
    #[default]
    Beginner,
    Advanced,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Beginner, Difficulty::Advanced, Difficulty::Expert];

    /// Bias added to the intro mood balance: lenient for beginners,
    /// strict for experts.
    pub fn mood_bias(&self) -> i32 {
        match self {
            Self::Beginner => 1,
            Self::Advanced => 0,
            Self::Expert => -1,
        }
    }

    pub fn is_beginner(&self) -> bool {
        matches!(self, Self::Beginner)
    }

    pub fn is_expert(&self) -> bool {
        matches!(self, Self::Expert)
    }
}

impl From<String> for Difficulty {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "advanced" | "intermediate" => Self::Advanced,
            "expert" | "hard" => Self::Expert,
            _ => Self::Beginner,
        }
    }
}

/// Persona configuration supplied by the request layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PersonaConfig {
    #[serde(deserialize_with = "lenient_disc_type")]
    pub disc_type: Option<DiscType>,
    pub client_category: ClientCategory,
    pub difficulty: Difficulty,
}

impl PersonaConfig {
    pub fn new(
        disc_type: Option<DiscType>,
        client_category: ClientCategory,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            disc_type,
            client_category,
            difficulty,
        }
    }

    /// Starting intro mood level on the 1..=5 scale.
    ///
    /// Beginners meet a friendlier client, experts a cooler one. Repeat
    /// clients start one level warmer, Dominant and Conscientious clients
    /// one level cooler.
    pub fn initial_mood_level(&self, min: i32, max: i32) -> i32 {
        let mut level = match self.difficulty {
            Difficulty::Beginner => 4,
            Difficulty::Advanced => 3,
            Difficulty::Expert => 2,
        };
        if self.client_category.is_repeat() {
            level += 1;
        }
        if matches!(
            self.disc_type,
            Some(DiscType::Dominant) | Some(DiscType::Conscientious)
        ) {
            level -= 1;
        }
        level.clamp(min, max)
    }
}

fn lenient_disc_type<'de, D>(deserializer: D) -> Result<Option<DiscType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(DiscType::parse))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod lenient_deserialization {
        use super::*;

        #[test]
        fn empty_object_gives_defaults() {
            let persona: PersonaConfig = serde_json::from_str("{}").unwrap();
            assert_eq!(persona, PersonaConfig::default());
            assert_eq!(persona.difficulty, Difficulty::Beginner);
            assert_eq!(persona.client_category, ClientCategory::New);
            assert_eq!(persona.disc_type, None);
        }

        #[test]
        fn parses_full_persona() {
            let persona: PersonaConfig = serde_json::from_str(
                r#"{"disc_type":"C","client_category":"repeat","difficulty":"expert"}"#,
            )
            .unwrap();
            assert_eq!(persona.disc_type, Some(DiscType::Conscientious));
            assert_eq!(persona.client_category, ClientCategory::Repeat);
            assert_eq!(persona.difficulty, Difficulty::Expert);
        }

        #[test]
        fn unknown_values_fall_back() {
            let persona: PersonaConfig = serde_json::from_str(
                r#"{"disc_type":"X","client_category":"vip","difficulty":"legendary"}"#,
            )
            .unwrap();
            assert_eq!(persona, PersonaConfig::default());
        }

        #[test]
        fn null_disc_type_is_none() {
            let persona: PersonaConfig =
                serde_json::from_str(r#"{"disc_type":null}"#).unwrap();
            assert_eq!(persona.disc_type, None);
        }

        #[test]
        fn disc_type_serializes_as_letter() {
            let json = serde_json::to_string(&DiscType::Steady).unwrap();
            assert_eq!(json, "\"S\"");
        }
    }

    mod mood_level {
        use super::*;

        #[test]
        fn difficulty_sets_the_baseline() {
            let beginner = PersonaConfig::new(None, ClientCategory::New, Difficulty::Beginner);
            let expert = PersonaConfig::new(None, ClientCategory::New, Difficulty::Expert);
            assert_eq!(beginner.initial_mood_level(1, 5), 4);
            assert_eq!(expert.initial_mood_level(1, 5), 2);
        }

        #[test]
        fn stays_within_bounds() {
            for disc in DiscType::ALL {
                for difficulty in Difficulty::ALL {
                    for category in [ClientCategory::New, ClientCategory::Repeat] {
                        let level = PersonaConfig::new(Some(disc), category, difficulty)
                            .initial_mood_level(1, 5);
                        assert!((1..=5).contains(&level));
                    }
                }
            }
        }

        #[test]
        fn bias_is_ordered_by_difficulty() {
            assert!(Difficulty::Beginner.mood_bias() > Difficulty::Advanced.mood_bias());
            assert!(Difficulty::Advanced.mood_bias() > Difficulty::Expert.mood_bias());
        }
    }
}
