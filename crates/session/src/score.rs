//! Cumulative score across the rounds of one session.

use rps_core::Outcome;
use serde::{Deserialize, Serialize};

/// Win and tie tallies for both sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub first: u32,
    pub second: u32,
    pub ties: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one completed round to the matching counter.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::FirstWins => self.first += 1,
            Outcome::SecondWins => self.second += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.first + self.second + self.ties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_credits_exactly_one_counter() {
        let mut score = ScoreBoard::new();
        score.record(Outcome::FirstWins);
        score.record(Outcome::Tie);
        score.record(Outcome::Tie);

        assert_eq!(score.first, 1);
        assert_eq!(score.second, 0);
        assert_eq!(score.ties, 2);
        assert_eq!(score.total(), 3);
    }
}
