//! Domain layer containing the simulation engine and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `simulation` - Signal extraction, mood, gates, transitions and client replies
//! - `analysis` - End-of-session feedback scoring

pub mod analysis;
pub mod foundation;
pub mod simulation;
