//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod training;

pub use training::{
    FinishSessionCommand, FinishSessionHandler, FinishSessionResult, StartSessionCommand,
    StartSessionHandler, StartSessionResult, SubmitTurnCommand, SubmitTurnHandler, TrainingError,
};
