//! Game configuration loaded from TOML.

use crate::games::tictactoe::{GameError, MAX_DIMENSION, MIN_DIMENSION, TileKeys};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Integer tags for the three tile states, as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Deserialize)]
pub struct KeySettings {
    /// Key marking empty tiles.
    #[serde(default = "default_empty_key")]
    empty: i32,

    /// Key marking O's pawns.
    #[serde(default = "default_o_key")]
    o: i32,

    /// Key marking X's pawns.
    #[serde(default = "default_x_key")]
    x: i32,
}

#[instrument]
fn default_empty_key() -> i32 {
    TileKeys::DEFAULT.empty()
}

#[instrument]
fn default_o_key() -> i32 {
    TileKeys::DEFAULT.o()
}

#[instrument]
fn default_x_key() -> i32 {
    TileKeys::DEFAULT.x()
}

impl KeySettings {
    /// Creates key settings from raw values.
    pub fn new(empty: i32, o: i32, x: i32) -> Self {
        Self { empty, o, x }
    }

    /// Replaces any key given as `Some`.
    pub fn with_overrides(self, empty: Option<i32>, o: Option<i32>, x: Option<i32>) -> Self {
        Self {
            empty: empty.unwrap_or(self.empty),
            o: o.unwrap_or(self.o),
            x: x.unwrap_or(self.x),
        }
    }

    /// Validates the settings into a key encoding.
    #[instrument]
    pub fn to_keys(&self) -> Result<TileKeys, GameError> {
        TileKeys::new(self.empty, self.o, self.x)
    }
}

impl Default for KeySettings {
    fn default() -> Self {
        Self::new(default_empty_key(), default_o_key(), default_x_key())
    }
}

/// Settings for a console game session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Deserialize)]
pub struct GameConfig {
    /// Board dimension. Prompted for when absent.
    #[serde(default)]
    dimension: Option<usize>,

    /// Tile key encoding.
    #[serde(default)]
    keys: KeySettings,
}

impl GameConfig {
    /// Creates a configuration.
    pub fn new(dimension: Option<usize>, keys: KeySettings) -> Self {
        Self { dimension, keys }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(dimension = ?config.dimension, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns a copy with the dimension replaced when `Some`.
    pub fn with_dimension(self, dimension: Option<usize>) -> Self {
        Self {
            dimension: dimension.or(self.dimension),
            ..self
        }
    }

    /// Returns a copy with the given key settings.
    pub fn with_keys(self, keys: KeySettings) -> Self {
        Self { keys, ..self }
    }

    /// Dimension usable for a game: present and within
    /// [`MIN_DIMENSION`]..=[`MAX_DIMENSION`].
    pub fn playable_dimension(&self) -> Option<usize> {
        self.dimension
            .filter(|d| (MIN_DIMENSION..=MAX_DIMENSION).contains(d))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config.dimension(), &None);
        assert_eq!(config.keys(), &KeySettings::default());
        assert_eq!(config.keys().to_keys(), Ok(TileKeys::DEFAULT));
    }

    #[test]
    fn test_partial_keys_table() {
        let config = GameConfig::from_toml("dimension = 4\n[keys]\nempty = 0\no = -1\n").unwrap();
        assert_eq!(config.playable_dimension(), Some(4));
        assert_eq!(config.keys(), &KeySettings::new(0, -1, 1));
    }

    #[test]
    fn test_small_dimension_is_not_playable() {
        let config = GameConfig::from_toml("dimension = 2").unwrap();
        assert_eq!(config.playable_dimension(), None);
    }

    #[test]
    fn test_oversized_dimension_is_not_playable() {
        let config = GameConfig::from_toml("dimension = 5000000000").unwrap();
        assert_eq!(config.dimension(), &Some(5_000_000_000));
        assert_eq!(config.playable_dimension(), None);

        let config = GameConfig::default().with_dimension(Some(MAX_DIMENSION));
        assert_eq!(config.playable_dimension(), Some(MAX_DIMENSION));
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::default()
            .with_dimension(Some(5))
            .with_dimension(None);
        assert_eq!(config.dimension(), &Some(5));

        let keys = KeySettings::default().with_overrides(Some(0), None, Some(-1));
        assert_eq!(keys, KeySettings::new(0, 0, -1));
        assert!(keys.to_keys().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = GameConfig::from_toml("dimension = \"big\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
