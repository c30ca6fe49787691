//! RNG module - deterministic turn source for scrambling
//!
//! Scrambling only needs a stream of quarter-turn counts in `0..4`, so a
//! small LCG is enough and keeps every scramble reproducible from its seed.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would only ever yield the increment.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of this LCG have short periods.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Quarter-turn count for one cell, uniform over `0..=3`
    pub fn next_turns(&mut self) -> u32 {
        self.next_range(4)
    }

    /// Current internal state, usable as a seed to replay from here
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
