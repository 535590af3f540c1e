//! Freestyle Gomoku rules engine
//!
//! Two players alternate placing stones on a 15x15 board (size is
//! configurable); the first to make an unbroken line of five or more in any
//! direction wins. Either seat can be driven by a pluggable move-selection
//! strategy instead of a human.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards and turn tracking
//! - [`rules`]: Win and draw detection
//! - [`strategy`]: Move selection for computer players
//! - [`game`]: Controller for turn order, validation and game lifecycle
//! - [`config`]: Construction-time parameters, loadable from TOML
//! - [`ui`]: egui/eframe renderer that drives the controller
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameConfig, GameController, GameStatus, Pos};
//!
//! let mut game = GameController::new(GameConfig::hotseat());
//! for col in 0..4 {
//!     game.submit_move(Pos::new(7, col)); // Black
//!     game.submit_move(Pos::new(8, col)); // White
//! }
//! game.submit_move(Pos::new(7, 4));
//! assert_eq!(game.status(), GameStatus::Won(gomoku::Player::Black));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod strategy;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardState, Cell, Player, Pos, DEFAULT_BOARD_SIZE};
pub use config::GameConfig;
pub use error::{ConfigError, MoveError};
pub use game::{GameController, GameEvent, GameMode, GameStatus, MoveOutcome};
pub use strategy::{MoveStrategy, RandomStrategy};
