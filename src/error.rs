use std::path::PathBuf;

use crate::board::Pos;

/// Reasons a submitted move is turned away. Rejection never changes game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("{pos} is outside the {size}x{size} board")]
    OutOfBounds { pos: Pos, size: usize },

    #[error("{0} is already occupied")]
    Occupied(Pos),

    #[error("game is over")]
    GameOver,

    #[error("computer move is pending")]
    StrategyPending,

    #[error("it is the computer's turn")]
    NotYourTurn,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OutOfBounds {
            pos: Pos::new(15, 2),
            size: 15,
        };
        assert_eq!(err.to_string(), "(15, 2) is outside the 15x15 board");
        assert_eq!(
            MoveError::Occupied(Pos::new(0, 0)).to_string(),
            "(0, 0) is already occupied"
        );
        assert_eq!(MoveError::NotYourTurn.to_string(), "it is the computer's turn");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board_size must be in [5, 25]".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board_size must be in [5, 25]"
        );
    }
}
