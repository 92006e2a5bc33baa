//! Syntactic heuristics over raw trainee text.
//!
//! Sentences are split on terminal punctuation, questions are counted by
//! `?`, and a question is "open" when it starts with an interrogative word
//! or carries an imperative cue such as "povedzte".

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::lexicon::{normalize, INTERROGATIVES, OPEN_QUESTION_CUES, QUESTION_LEAD_INS};

static SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?…]+[.!?…]*").expect("sentence pattern must compile"));

/// One sentence of trainee text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    pub is_question: bool,
}

/// Shape of a message: how much was said and how much was asked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextShape {
    pub sentence_count: usize,
    pub question_count: u32,
    pub open_question_count: u32,
    /// Normalized open questions in the order they were asked.
    pub open_questions: Vec<String>,
}

impl TextShape {
    pub fn analyze(text: &str) -> Self {
        let sentences = split_sentences(text);
        let open_questions: Vec<String> = sentences
            .iter()
            .filter(|s| s.is_question && is_open_question(s.text))
            .map(|s| normalize(s.text))
            .collect();

        Self {
            sentence_count: sentences.len(),
            question_count: text.matches('?').count() as u32,
            open_question_count: open_questions.len() as u32,
            open_questions,
        }
    }

    /// Many sentences and not a single question.
    pub fn is_monologue(&self, min_sentences: usize) -> bool {
        self.sentence_count >= min_sentences && self.question_count == 0
    }
}

/// Splits text into sentences that contain at least one letter or digit.
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    SENTENCE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .map(|s| Sentence {
            text: s.trim(),
            is_question: s.contains('?'),
        })
        .collect()
}

/// True for questions that invite elaboration rather than yes/no.
pub fn is_open_question(sentence: &str) -> bool {
    let normalized = normalize(sentence);
    if OPEN_QUESTION_CUES.matches(&normalized) {
        return true;
    }

    normalized
        .split(' ')
        .skip_while(|word| QUESTION_LEAD_INS.contains(word))
        .next()
        .map_or(false, |first| INTERROGATIVES.contains(&first))
}

/// Share of tokens two normalized questions have in common, relative to
/// the longer of the two.
pub fn token_overlap(a: &str, b: &str) -> f64 {
    let left: HashSet<&str> = a.split_whitespace().collect();
    let right: HashSet<&str> = b.split_whitespace().collect();
    let longest = left.len().max(right.len());
    if longest == 0 {
        return 0.0;
    }
    left.intersection(&right).count() as f64 / longest as f64
}

/// True if `candidate` repeats `previous`: either enough shared tokens or
/// one is a prefix of the other covering most of its length.
pub fn is_repeated_question(
    candidate: &str,
    previous: &str,
    min_overlap: f64,
    min_prefix_ratio: f64,
) -> bool {
    if candidate.is_empty() || previous.is_empty() {
        return false;
    }
    if token_overlap(candidate, previous) >= min_overlap {
        return true;
    }

    let (shorter, longer) = if candidate.len() <= previous.len() {
        (candidate, previous)
    } else {
        (previous, candidate)
    };
    longer.starts_with(shorter)
        && shorter.chars().count() as f64 / longer.chars().count() as f64 >= min_prefix_ratio
}
