//! Turn sequencing and game lifecycle
//!
//! [`GameController`] is the single entry point for external collaborators:
//! input handlers call [`GameController::submit_move`] and
//! [`GameController::restart`], renderers read the query methods or
//! subscribe to [`GameEvent`]s.

mod controller;

pub use crate::config::GameMode;
pub use controller::GameController;

use crate::board::{Player, Pos};
use crate::error::MoveError;

/// Lifecycle of one game. `Won` and `Draw` are terminal until restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} wins!", player.name()),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Result of submitting a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Stone placed. `status` is the game status right after this stone,
    /// before any computer reply.
    Accepted {
        pos: Pos,
        player: Player,
        status: GameStatus,
    },
    /// Nothing changed
    Rejected(MoveError),
}

impl MoveOutcome {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

/// State-change notifications for renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    MovePlayed { pos: Pos, player: Player },
    /// A computer move has been scheduled
    StrategyThinking { player: Player },
    GameOver(GameStatus),
    Restarted,
}
