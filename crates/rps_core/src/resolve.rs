//! Round resolution: a move pair maps to exactly one outcome.

use crate::types::Move;
use serde::{Deserialize, Serialize};

/// Result classification of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Tie,
}

impl Outcome {
    /// The same outcome seen from the other side of the table.
    pub fn flip(self) -> Outcome {
        match self {
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

/// Immutable record of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub outcome: Outcome,
    pub first: Move,
    pub second: Move,
}

/// Resolve a pair of moves into an outcome.
///
/// Identical moves tie. Otherwise the first move either beats the second
/// or loses to it; no other branch is possible.
pub fn resolve(first: Move, second: Move) -> Outcome {
    if first == second {
        Outcome::Tie
    } else if first.beats(second) {
        Outcome::FirstWins
    } else {
        Outcome::SecondWins
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod resolve_tests;
