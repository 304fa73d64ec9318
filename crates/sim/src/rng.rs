//! RNG module - random roll generation
//!
//! Each roll draws a pin count uniformly from 0 to 10 and knocks down that
//! many pins, lowest numbered first, on a fresh rack. The frame merges the
//! rack into its own, so on a second roll only pins that were still
//! standing add to the count.
//!
//! Uses a simple LCG so a seed fully determines the game.

use bowling_score_core::PinSet;

use crate::types::PIN_COUNT;

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }
}

/// Produces the rack for each roll of a simulated game
#[derive(Debug, Clone)]
pub struct Bowler {
    rng: SimpleRng,
    seed: u32,
}

impl Bowler {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Seed this bowler was created with (for replaying the same game)
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Draw the pin count for the next roll (0-10)
    pub fn next_count(&mut self) -> u8 {
        self.rng.next_range(PIN_COUNT as u32 + 1) as u8
    }

    /// Draw the next roll as a rack
    pub fn next_roll(&mut self) -> (u8, PinSet) {
        let count = self.next_count();
        (count, PinSet::with_first_down(count))
    }
}

impl Default for Bowler {
    fn default() -> Self {
        Self::new(1)
    }
}
