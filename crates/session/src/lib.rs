//! Round orchestration for rock-paper-scissors.
//!
//! This crate owns the session lifecycle:
//! - Sequencing move acquisition (human input or a `Strategy` sample)
//! - Invoking the resolver and tallying the cumulative score
//! - Guarding the deferred computer-vs-computer resolution against
//!   completions that outlive their session

mod score;
mod session;

pub use score::*;
pub use session::*;
