use std::path::Path;

use crate::engine::Difficulty;
use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
///
/// ```toml
/// difficulty = "hard"
/// seed = 42
///
/// [window]
/// width = 900.0
/// height = 700.0
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Opponent strength at startup
    pub difficulty: Difficulty,
    /// Fixed seed for the random (Easy) opponent
    pub seed: Option<u64>,
    pub window: WindowConfig,
}

/// Initial window size in logical points
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            difficulty: Difficulty::default(),
            seed: None,
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 900.0,
            height: 700.0,
        }
    }
}

impl GameConfig {
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
        let WindowConfig { width, height } = self.window;
        if !(width.is_finite() && width > 0.0) {
            return Err(ConfigError::Validation(format!(
                "window.width must be > 0, got {width}"
            )));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(ConfigError::Validation(format!(
                "window.height must be > 0, got {height}"
            )));
        }
        Ok(())
    }
}
