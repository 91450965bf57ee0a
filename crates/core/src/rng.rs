//! RNG module - seeded piece selection
//!
//! A small LCG keeps sessions reproducible: the same seed always produces the
//! same piece sequence, which the tests and benchmarks rely on.

use crate::catalog::{kind_at, CATALOG_SIZE};
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales the full 32-bit output instead of taking a modulus: the low
    /// bits of a power-of-two LCG cycle with a tiny period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Pick a catalog entry uniformly at random
    pub fn next_kind(&mut self) -> PieceKind {
        let index = self.next_range(CATALOG_SIZE as u32) as usize;
        kind_at(index).unwrap_or(PieceKind::I)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
