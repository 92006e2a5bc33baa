//! Random Source Port - Injected randomness for branching and reply style.
//!
//! Every random decision in the simulation goes through this port, so a
//! seeded adapter makes whole sessions reproducible.

/// Port for drawing random numbers.
pub trait RandomSource: Send {
    /// Next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// True with probability `p`. Non-positive `p` never fires and
    /// consumes no draw.
    fn chance(&mut self, p: f64) -> bool {
        if p <= 0.0 {
            return false;
        }
        self.next_f64() < p
    }

    /// Uniform index into a collection of `len` items. Returns 0 for an
    /// empty collection.
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }
}
