//! Move selection for computer-controlled players
//!
//! A strategy only proposes a move; the controller validates and applies it
//! through the same path as human input.

mod random;

pub use random::RandomStrategy;

use crate::board::{Board, Pos};

/// Picks the next move for a non-human player.
pub trait MoveStrategy: Send {
    /// Choose an empty intersection, or `None` when the board has none.
    fn select_move(&mut self, board: &Board) -> Option<Pos>;

    /// Short name for logs and the UI
    fn name(&self) -> &str;
}
