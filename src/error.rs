use std::path::PathBuf;

use crate::core::WordError;

/// Errors raised by game lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("dictionary has no {0}-letter words")]
    NoWordsOfLength(usize),
}

/// Errors that can occur while saving or loading a session.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read session from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse session from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A share token that cannot start a shared game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    #[error("share token is not valid base64")]
    Undecodable,

    #[error("share token is empty")]
    Empty,

    #[error("share token does not hold a valid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("shared word {0} is not in the dictionary")]
    NotInDictionary(String),
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
