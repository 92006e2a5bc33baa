//! Storage Adapters
//!
//! Implementations of the SessionStore port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - Stores sessions in memory (console trainer, testing)

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
