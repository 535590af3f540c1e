//! Game rules for freestyle Gomoku
//!
//! Five or more stones in an unbroken line wins; overlines count.
//! A full board with no line is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{find_five_line_at_pos, has_five_at_pos, is_draw, DIRECTIONS, WIN_LENGTH};
