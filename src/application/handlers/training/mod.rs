//! Training session handlers.
//!
//! - `StartSessionHandler` - creates a session and returns the client's greeting
//! - `SubmitTurnHandler` - runs one trainee turn, serialized per session
//! - `FinishSessionHandler` - produces the feedback report on demand

mod error;
mod finish_session;
mod start_session;
mod submit_turn;

pub use error::TrainingError;
pub use finish_session::{FinishSessionCommand, FinishSessionHandler, FinishSessionResult};
pub use start_session::{StartSessionCommand, StartSessionHandler, StartSessionResult};
pub use submit_turn::{SubmitTurnCommand, SubmitTurnHandler};
