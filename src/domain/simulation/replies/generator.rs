//! Builds the simulated client's reply for the phase the conversation is
//! entering.

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::domain::simulation::mood::{reason_text, ClientMood, MoodReason};
use crate::domain::simulation::persona::{DiscType, PersonaConfig};
use crate::domain::simulation::phase::SalesPhase;
use crate::ports::RandomSource;

use super::objections::objection_pool;
use super::templates;

/// Intro verbosity never exceeds these word counts at the two lowest levels.
pub const SHORT_REPLY_MAX_WORDS: usize = 18;
pub const CURT_REPLY_MAX_WORDS: usize = 8;

/// What the client says back, with its mood label and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientReply {
    pub text: String,
    pub mood: ClientMood,
    pub reason: String,
}

/// Inputs the reply depends on, all taken after the turn was applied.
#[derive(Debug, Clone, Copy)]
pub struct ReplyContext<'a> {
    pub phase: SalesPhase,
    pub persona: &'a PersonaConfig,
    pub mood_score: i32,
    pub mood_level: i32,
    pub reasons: &'a [MoodReason],
}

#[derive(Debug, Clone, Copy)]
pub struct ReplyGenerator {
    overlay_probability_new: f64,
    overlay_probability_repeat: f64,
    tone_tail_probability: f64,
}

impl ReplyGenerator {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            overlay_probability_new: config.overlay_probability_new,
            overlay_probability_repeat: config.overlay_probability_repeat,
            tone_tail_probability: config.tone_tail_probability,
        }
    }

    /// Full reply for a completed trainee turn.
    pub fn generate(&self, ctx: ReplyContext<'_>, rng: &mut dyn RandomSource) -> ClientReply {
        let persona = ctx.persona;
        let repeat = persona.client_category.is_repeat();

        let mut text = match ctx.phase {
            SalesPhase::Intro => self.intro_reply(repeat, ctx.mood_level, rng),
            SalesPhase::Objections => pick(objection_pool(persona), rng).to_string(),
            phase => pick(templates::base_templates(phase, repeat), rng).to_string(),
        };

        let curt_intro = ctx.phase == SalesPhase::Intro && ctx.mood_level <= 2;
        if let Some(disc) = persona.disc_type {
            if !curt_intro {
                text = self.overlay(text, disc, repeat, ctx.mood_score, rng);
            }
            if disc == DiscType::Dominant {
                text = terse(&text);
            }
        }

        ClientReply {
            text,
            mood: ClientMood::from_score(ctx.mood_score),
            reason: reason_text(ctx.reasons),
        }
    }

    /// Reply to an empty message. Draws no randomness.
    pub fn waiting(&self, phase: SalesPhase, mood_score: i32) -> ClientReply {
        ClientReply {
            text: templates::waiting_reply(phase).to_string(),
            mood: ClientMood::from_score(mood_score),
            reason: reason_text(&[]),
        }
    }

    /// Opening line of a fresh session.
    pub fn greeting(&self, persona: &PersonaConfig, mood_score: i32) -> ClientReply {
        ClientReply {
            text: templates::greeting(persona.client_category.is_repeat()).to_string(),
            mood: ClientMood::from_score(mood_score),
            reason: reason_text(&[]),
        }
    }

    fn intro_reply(&self, repeat: bool, level: i32, rng: &mut dyn RandomSource) -> String {
        if level <= 1 {
            return pick(templates::CURT_REPLIES, rng).to_string();
        }

        let base = pick(templates::base_templates(SalesPhase::Intro, repeat), rng);
        match level {
            2 => {
                let room = SHORT_REPLY_MAX_WORDS - word_count(templates::GOAL_QUESTION);
                format!("{} {}", truncate_words(base, room), templates::GOAL_QUESTION)
            }
            3 => base.to_string(),
            4 => format!("{} {}", base, pick(templates::DETAIL_REQUESTS, rng)),
            _ => format!(
                "{} {} {}",
                base,
                templates::INTRO_VERBOSE_TAIL,
                pick(templates::INTRO_FOLLOW_UPS, rng)
            ),
        }
    }

    fn overlay(
        &self,
        text: String,
        disc: DiscType,
        repeat: bool,
        mood_score: i32,
        rng: &mut dyn RandomSource,
    ) -> String {
        let probability = if repeat {
            self.overlay_probability_repeat
        } else {
            self.overlay_probability_new
        };
        let mut text = if rng.chance(probability) {
            format!("{} {}", pick(templates::disc_openers(disc), rng), text)
        } else {
            text
        };

        match disc {
            DiscType::Influential if mood_score > 0 => {
                if rng.chance(self.tone_tail_probability) {
                    text = format!("{} {}", text, pick(templates::AFFIRMATIONS, rng));
                }
            }
            DiscType::Conscientious => {
                if rng.chance(self.tone_tail_probability) {
                    text = format!("{} {}", text, pick(templates::DATA_REQUESTS, rng));
                }
            }
            _ => {}
        }
        text
    }
}

fn pick(pool: &'static [&'static str], rng: &mut dyn RandomSource) -> &'static str {
    pool.get(rng.pick_index(pool.len())).copied().unwrap_or_default()
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Keeps at most `max` words, closing the cut with a full stop.
fn truncate_words(text: &str, max: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max {
        return text.to_string();
    }
    let cut = words[..max].join(" ");
    format!("{}.", cut.trim_end_matches(|c: char| c.is_ascii_punctuation()))
}

/// Direct tone: softeners dropped, first letter re-capitalized.
fn terse(text: &str) -> String {
    let kept: Vec<&str> = text
        .split_whitespace()
        .filter(|word| {
            let bare = word
                .trim_matches(|c: char| c.is_ascii_punctuation())
                .to_lowercase();
            !templates::SOFTENERS.contains(&bare.as_str())
        })
        .collect();
    if kept.is_empty() {
        return text.to_string();
    }
    capitalize_first(&kept.join(" "))
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
