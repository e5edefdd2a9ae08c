pub mod resolve;
pub mod types;

pub use resolve::*;
pub use types::*;

// =============================================================================
// Strategy trait, implemented by all computer players
// =============================================================================

/// Trait that all computer players implement.
///
/// This keeps the session and the GUI independent of how a move gets
/// picked. The shipped implementation draws uniformly at random; anything
/// smarter is out of scope for the game.
pub trait Strategy: Send {
    /// Choose the next move for this player.
    fn choose(&mut self) -> Move;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;

    /// Reset internal state for a new session.
    fn new_session(&mut self) {}
}
