use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{Token, CONNECT, COLS, ROWS};

/// Largest board edge accepted from configuration.
pub const MAX_DIMENSION: usize = 16;

/// Game setup: who starts and how big the grid is.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: Token,
    pub rows: usize,
    pub cols: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_player: Token::White,
            rows: ROWS,
            cols: COLS,
        }
    }
}

/// Terminal front end settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long the TUI waits for a key before redrawing.
    pub poll_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DIMENSION).contains(&self.game.rows) {
            return Err(ConfigError::Validation(format!(
                "game.rows must be in 1..={MAX_DIMENSION}"
            )));
        }
        if !(1..=MAX_DIMENSION).contains(&self.game.cols) {
            return Err(ConfigError::Validation(format!(
                "game.cols must be in 1..={MAX_DIMENSION}"
            )));
        }
        if self.game.rows < CONNECT && self.game.cols < CONNECT {
            return Err(ConfigError::Validation(format!(
                "game.rows or game.cols must be >= {CONNECT}"
            )));
        }
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.rows, 6);
        assert_eq!(config.game.cols, 7);
        assert_eq!(config.game.first_player, Token::White);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
first_player = "black"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.first_player, Token::Black);
        assert_eq!(config.game.rows, ROWS);
        assert_eq!(config.ui.poll_interval_ms, 100);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game.cols, COLS);
        assert_eq!(config.game.first_player, Token::White);
    }

    #[test]
    fn test_unknown_token_fails_to_parse() {
        let toml_str = r#"
[game]
first_player = "red"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.game.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let mut config = AppConfig::default();
        config.game.cols = MAX_DIMENSION + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_board_without_room_to_win() {
        let mut config = AppConfig::default();
        config.game.rows = 3;
        config.game.cols = 3;
        assert!(config.validate().is_err());

        config.game.cols = 4;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_poll_interval() {
        let mut config = AppConfig::default();
        config.ui.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.game.rows, ROWS);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
rows = 8
cols = 9
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.rows, 8);
        assert_eq!(config.game.cols, 9);
        assert_eq!(config.ui.poll_interval_ms, 100);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[ui]\npoll_interval_ms = 0\n").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
