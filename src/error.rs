use std::path::PathBuf;

/// Errors raised when a game is constructed with an invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("board must be at least 4x4, got {height}x{width}")]
    BoardTooSmall { height: usize, width: usize },

    #[error("a game needs at least 2 players, got {0}")]
    NotEnoughPlayers(usize),

    #[error("player ordinal {0} is used more than once")]
    DuplicateOrdinal(u32),
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

    #[error("invalid game setup: {0}")]
    Setup(#[from] SetupError),
}
