//! Heuristic text-signal extraction.
//!
//! - `lexicon` - declarative phrase tables and the generic matcher
//! - `text` - sentence, question and repetition heuristics
//! - `extractor` - phase-aware assembly of a [`SignalSet`]

pub mod lexicon;
mod extractor;
mod text;

pub use extractor::{
    CommercialSignals, DiscRedFlag, DiscoverySignals, IntroSignals, SignalExtractor, SignalSet,
};
pub use text::{is_open_question, is_repeated_question, split_sentences, Sentence, TextShape};
