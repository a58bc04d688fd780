//! Application configuration
//!
//! Loaded from TOML. Every section and field has a default, so a partial file
//! (or no file at all) is fine.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::error::ConfigError;
use crate::game::{ControllerSettings, GameOptions};

const APP_NAME: &str = "wordle_engine";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub share: ShareConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub word_length: usize,
    pub hard_mode: bool,
    /// Pause between pressing Enter and the guess being scored
    pub submit_delay_ms: u64,
    /// Save the running clock every this many seconds, 0 disables
    pub autosave_seconds: u64,
    /// Custom word list, one word per line
    pub wordlist: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            hard_mode: false,
            submit_delay_ms: 100,
            autosave_seconds: 30,
            wordlist: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub session_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_file: data_dir().join("session.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Where the terminal UI writes its log file
    pub log_dir: PathBuf,
    /// Filter used when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: cache_dir().join("logs"),
            filter: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Base URL share links point at; without one the summary shows the
    /// `wordle open` command instead
    pub base_url: Option<String>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed, or holds
    /// invalid values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    ///
    /// # Errors
    /// See [`load`](Self::load).
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Platform default location of the config file
    #[must_use]
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map_or_else(|| PathBuf::from("wordle.toml"), |dirs| {
                dirs.config_dir().join("config.toml")
            })
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&self.game.word_length) {
            return Err(ConfigError::Validation(format!(
                "game.word_length must be in {MIN_WORD_LENGTH}..={MAX_WORD_LENGTH}"
            )));
        }
        if self.game.submit_delay_ms > 5_000 {
            return Err(ConfigError::Validation(
                "game.submit_delay_ms must be <= 5000".into(),
            ));
        }
        if self.storage.session_file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "storage.session_file must not be empty".into(),
            ));
        }
        if let Some(base_url) = &self.share.base_url
            && base_url.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "share.base_url must not be blank".into(),
            ));
        }
        Ok(())
    }

    /// Options for the next new game
    #[must_use]
    pub fn game_options(&self) -> GameOptions {
        GameOptions {
            word_length: self.game.word_length,
            hard_mode: self.game.hard_mode,
        }
    }

    #[must_use]
    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            submit_delay: Duration::from_millis(self.game.submit_delay_ms),
            autosave_seconds: self.game.autosave_seconds,
        }
    }
}

fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map_or_else(|| PathBuf::from("./save_data"), |dirs| dirs.data_dir().to_path_buf())
}

fn cache_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME).map_or_else(
        || std::env::temp_dir().join(APP_NAME),
        |dirs| dirs.cache_dir().to_path_buf(),
    )
}
