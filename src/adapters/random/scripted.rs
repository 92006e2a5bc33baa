//! Scripted Random Adapter
//!
//! Replays a fixed list of draws, cycling when it runs out. Lets tests pin
//! every objection draw and overlay decision.

use crate::ports::RandomSource;

#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    position: usize,
}

impl ScriptedRandom {
    /// Draws outside `[0, 1)` are clamped into it. An empty script always
    /// draws 0.
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws
            .into()
            .into_iter()
            .map(|d| d.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { draws, position: 0 }
    }

    /// Always draws `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.position % self.draws.len()];
        self.position += 1;
        value
    }
}
