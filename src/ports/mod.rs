//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RandomSource` - Injected, seedable randomness for the simulation
//! - `SessionStore` - Session state and final report durability

mod random_source;
mod session_store;

pub use random_source::RandomSource;
pub use session_store::{SessionStore, SessionStoreError, StoredReport};
