//! Random Source Adapters
//!
//! - **SeededRandom** - `StdRng` seeded from a `u64`, reproducible across runs
//! - **ScriptedRandom** - Replays a fixed list of draws (testing)

mod scripted;
mod seeded;

pub use scripted::ScriptedRandom;
pub use seeded::SeededRandom;
