//! Uniform-Random Strategy
//!
//! The move picker behind every computer side in the game. It draws
//! uniformly at random from the three moves. Useful for:
//! - The computer opponent in human-vs-computer play
//! - Both sides in computer-vs-computer play
//! - Exercising session accounting in tests

use rand::{thread_rng, Rng};
use rps_core::{Move, Strategy};

#[cfg(test)]
mod lib_tests;

/// A player that picks moves uniformly at random.
///
/// Every call takes a fresh sample from the thread-local generator, so
/// draws are independent across calls and across players within the same
/// round.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for RandomStrategy {
    fn choose(&mut self) -> Move {
        let mut rng = thread_rng();
        Move::ALL[rng.gen_range(0..Move::ALL.len())]
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
