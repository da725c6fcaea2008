use std::path::PathBuf;

/// Misuse of the game core. Rejected moves are not errors; see
/// [`crate::game::MoveOutcome::Rejected`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },

    #[error("can't make a move on a finished game")]
    GameFinished,
}

/// Errors turning raw player input into a column or token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("column {value} is out of range, select a number between 1 and {max}")]
    ColumnOutOfRange { value: i64, max: usize },

    #[error("unknown player color '{0}' (expected white or black)")]
    UnknownToken(String),
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
