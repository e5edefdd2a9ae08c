//! The session state machine.

use rps_core::{resolve, Move, RoundResult, Strategy};
use serde::{Deserialize, Serialize};

use crate::score::ScoreBoard;

/// Play mode for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    HumanVsComputer,
    ComputerVsComputer,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::HumanVsComputer, Mode::ComputerVsComputer];
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::HumanVsComputer => write!(f, "Human vs Computer"),
            Mode::ComputerVsComputer => write!(f, "Computer vs Computer"),
        }
    }
}

/// Proof that a deferred resolution belongs to the live session.
///
/// Issued by [`Session::start_round`] and checked by
/// [`Session::finish_auto`]. A mode change or new game invalidates every
/// ticket issued before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundTicket {
    epoch: u64,
}

/// Cumulative score and round state spanning multiple rounds until reset.
///
/// The session alternates between two phases: idle (the previous result,
/// if any, is live) and playing (waiting for moves). Counters only move
/// forward within a session; they reset together through `new_game` or
/// `change_mode` and through nothing else. Refused transitions return
/// `None` and leave the state untouched.
#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    rounds: u32,
    score: ScoreBoard,
    last_result: Option<RoundResult>,
    playing: bool,
    /// Session generation; bumped on every reset to orphan pending tickets
    epoch: u64,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            rounds: 0,
            score: ScoreBoard::new(),
            last_result: None,
            playing: false,
            epoch: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn score(&self) -> ScoreBoard {
        self.score
    }

    pub fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Begin a round: clears the previous result and issues the ticket a
    /// deferred resolution must present. Refused while a round is already
    /// in flight.
    pub fn start_round(&mut self) -> Option<RoundTicket> {
        if self.playing {
            return None;
        }
        self.playing = true;
        self.last_result = None;
        Some(RoundTicket { epoch: self.epoch })
    }

    /// Human-vs-computer resolution: the human plays `human` as the first
    /// side and the computer's answer is sampled immediately. Refused when
    /// idle or in the wrong mode.
    pub fn submit_move(
        &mut self,
        human: Move,
        computer: &mut dyn Strategy,
    ) -> Option<RoundResult> {
        if !self.playing || self.mode != Mode::HumanVsComputer {
            return None;
        }
        let reply = computer.choose();
        Some(self.commit(human, reply))
    }

    /// Computer-vs-computer resolution, fired when the think delay
    /// elapses. A ticket from a replaced session is silently discarded so
    /// a late timer cannot touch the new session's counters.
    pub fn finish_auto(
        &mut self,
        ticket: RoundTicket,
        first: &mut dyn Strategy,
        second: &mut dyn Strategy,
    ) -> Option<RoundResult> {
        if ticket.epoch != self.epoch
            || !self.playing
            || self.mode != Mode::ComputerVsComputer
        {
            return None;
        }
        let (a, b) = (first.choose(), second.choose());
        Some(self.commit(a, b))
    }

    /// Switch to a fresh session in `mode`; all counters restart at zero.
    pub fn change_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    /// Restart the counters, keeping the current mode.
    pub fn new_game(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.rounds = 0;
        self.score = ScoreBoard::new();
        self.last_result = None;
        self.playing = false;
        self.epoch += 1;
    }

    fn commit(&mut self, first: Move, second: Move) -> RoundResult {
        let result = RoundResult {
            outcome: resolve(first, second),
            first,
            second,
        };
        self.rounds += 1;
        self.score.record(result.outcome);
        self.last_result = Some(result);
        self.playing = false;
        result
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
