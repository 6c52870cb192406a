//! Random implementations.

use crate::infrastructure::ports::RandomPort;

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: usize, max: usize) -> usize {
        use rand::Rng;
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Fixed random for testing: always the lowest value of the range.
#[cfg(test)]
pub struct LowestRandom;

#[cfg(test)]
impl RandomPort for LowestRandom {
    fn gen_range(&self, min: usize, _max: usize) -> usize {
        min
    }
}
