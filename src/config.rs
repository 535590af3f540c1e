use std::path::Path;
use std::time::Duration;

use crate::board::{Player, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;

/// Who sits in each seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GameMode {
    /// Player vs computer; the other colour is strategy-driven
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::Black }
    }
}

impl GameMode {
    pub fn is_human(self, player: Player) -> bool {
        match self {
            GameMode::PvE { human } => human == player,
            GameMode::PvP => true,
        }
    }
}

/// Construction-time parameters of a game, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub first_player: Player,
    pub mode: GameMode,
    /// Artificial "thinking" pause before a computer move; 0 applies it immediately
    pub strategy_delay_ms: u64,
    /// Seed for the random strategy; OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            first_player: Player::Black,
            mode: GameMode::default(),
            strategy_delay_ms: 500,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Two humans sharing one board
    pub fn hotseat() -> Self {
        GameConfig {
            mode: GameMode::PvP,
            ..Self::default()
        }
    }

    /// Human vs computer with the computer answering immediately
    pub fn instant(human: Player) -> Self {
        GameConfig {
            mode: GameMode::PvE { human },
            strategy_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn strategy_delay(&self) -> Duration {
        Duration::from_millis(self.strategy_delay_ms)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be in [{MIN_BOARD_SIZE}, {MAX_BOARD_SIZE}], got {}",
                self.board_size
            )));
        }
        if self.strategy_delay_ms > 60_000 {
            return Err(ConfigError::Validation(
                "strategy_delay_ms must be <= 60000".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board_size, 15);
        assert_eq!(config.first_player, Player::Black);
        assert_eq!(config.mode, GameMode::PvE { human: Player::Black });
        assert_eq!(config.strategy_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: GameConfig = toml::from_str(
            r#"
            board_size = 9
            strategy_delay_ms = 0

            [mode]
            kind = "pve"
            human = "white"
            "#,
        )
        .unwrap();
        assert_eq!(config.board_size, 9);
        assert_eq!(config.strategy_delay_ms, 0);
        assert_eq!(config.mode, GameMode::PvE { human: Player::White });
        // Unspecified fields keep defaults
        assert_eq!(config.first_player, Player::Black);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_parse_pvp_toml() {
        let config: GameConfig = toml::from_str("seed = 7\n[mode]\nkind = \"pvp\"\n").unwrap();
        assert_eq!(config.mode, GameMode::PvP);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_board_size() {
        let too_small = GameConfig {
            board_size: 4,
            ..GameConfig::default()
        };
        assert!(matches!(too_small.validate(), Err(ConfigError::Validation(_))));

        let too_big = GameConfig {
            board_size: 26,
            ..GameConfig::default()
        };
        assert!(too_big.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = GameConfig::load_or_default(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gomoku.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
board_size = 19
first_player = "white"
seed = 42

[mode]
kind = "pvp"
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.board_size, 19);
        assert_eq!(config.first_player, Player::White);
        assert_eq!(config.mode, GameMode::PvP);
        assert_eq!(config.seed, Some(42));
        // Others are defaults
        assert_eq!(config.strategy_delay_ms, 500);
        assert_eq!(GameConfig::load_or_default(&path).unwrap(), config);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gomoku.toml");
        std::fs::write(&path, "board_size = 40\n").unwrap();
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::Validation(_))));

        std::fs::write(&path, "board_size = \"big\"\n").unwrap();
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_load_reports_path() {
        let err = GameConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }

    #[test]
    fn test_is_human() {
        let pve = GameMode::PvE { human: Player::Black };
        assert!(pve.is_human(Player::Black));
        assert!(!pve.is_human(Player::White));
        assert!(GameMode::PvP.is_human(Player::White));
    }
}
