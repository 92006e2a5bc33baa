//! Sales Sim - Sales conversation training simulator
//!
//! A trainee types what a salesperson would say; a simulated client answers
//! in character, the conversation advances through sales phases once their
//! gates are met, and a scored feedback report closes the session.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
