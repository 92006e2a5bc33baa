//! Simulated client replies.

mod generator;
mod objections;
pub mod templates;

pub use generator::{
    ClientReply, ReplyContext, ReplyGenerator, CURT_REPLY_MAX_WORDS, SHORT_REPLY_MAX_WORDS,
};
pub use objections::objection_pool;
