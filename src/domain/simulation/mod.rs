//! Sales conversation simulation engine.
//!
//! # Module Organization
//!
//! - `phase` - Conversation phases and their state machine
//! - `persona` - DISC type, client category and difficulty
//! - `signals` - Heuristic signal extraction from trainee text
//! - `metrics` - Session metrics, intro flags and per-phase counters
//! - `mood` - Bounded mood model and client mood labels
//! - `gate` - Conjunctive phase gates
//! - `engine` - Phase transitions with injected randomness
//! - `replies` - Persona-aware client reply generation
//! - `session` - Session state threaded through turns
//! - `simulator` - One-turn pipeline tying it all together

mod engine;
mod gate;
mod metrics;
mod mood;
mod persona;
mod phase;
pub mod replies;
mod session;
pub mod signals;
mod simulator;

pub use engine::{TransitionEngine, TurnTriggers};
pub use gate::{PhaseGate, PhaseGateResult, UnmetCondition};
pub use metrics::{IntroCounters, IntroFlags, Metrics, NeedsCounters, PhaseCounters};
pub use mood::{reason_text, ClientMood, MoodDelta, MoodModel, MoodReason};
pub use persona::{ClientCategory, DiscType, Difficulty, PersonaConfig};
pub use phase::SalesPhase;
pub use replies::{ClientReply, ReplyContext, ReplyGenerator};
pub use session::SessionState;
pub use simulator::{TurnOutcome, TurnSimulator};
