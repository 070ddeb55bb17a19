use std::path::Path;

use crate::error::ConfigError;
use crate::game::{GameState, PlayerFactory, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_SIDE};

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Turn order, one display color per player.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub colors: Vec<String>,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            colors: vec!["red".to_string(), "yellow".to_string()],
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
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
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height < MIN_SIDE {
            return Err(ConfigError::Validation(format!(
                "board.height must be >= {MIN_SIDE}"
            )));
        }
        if self.board.width < MIN_SIDE {
            return Err(ConfigError::Validation(format!(
                "board.width must be >= {MIN_SIDE}"
            )));
        }
        if self.players.colors.len() < 2 {
            return Err(ConfigError::Validation(
                "players.colors must list at least 2 players".into(),
            ));
        }
        if self.players.colors.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "players.colors must not contain blank entries".into(),
            ));
        }
        Ok(())
    }

    /// Start a match with this configuration, drawing player ordinals from
    /// `factory`.
    pub fn new_game(&self, factory: &mut PlayerFactory) -> Result<GameState, ConfigError> {
        self.validate()?;
        let players = factory.roster(self.players.colors.iter().cloned());
        Ok(GameState::new(self.board.height, self.board.width, players)?)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
