//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `random` - Seeded and scripted `RandomSource` implementations
//! - `storage` - In-memory `SessionStore`

pub mod random;
pub mod storage;

pub use random::{ScriptedRandom, SeededRandom};
pub use storage::InMemorySessionStore;
