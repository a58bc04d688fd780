//! Persisted game session
//!
//! The logical save layout: the secret, every accepted guess, the options the
//! game is played with, whether the secret came from a share token, and the time
//! spent so far.

use crate::core::{Word, WordError};
use serde::{Deserialize, Serialize};

/// Player options that survive across games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameOptions {
    /// Length of the secret for the next new game
    pub word_length: usize,
    pub hard_mode: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            word_length: 5,
            hard_mode: false,
        }
    }
}

/// Save data for the game in progress
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    pub secret: String,
    pub guesses: Vec<String>,
    #[serde(flatten)]
    pub options: GameOptions,
    /// Secret was supplied by a share token rather than drawn at random
    pub shared: bool,
    pub elapsed_seconds: u64,
}

impl Session {
    /// Fresh session with no secret yet
    #[must_use]
    pub fn with_options(options: GameOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Parse the stored secret
    ///
    /// # Errors
    /// Returns `WordError` if the stored secret is missing or malformed.
    pub fn secret_word(&self) -> Result<Word, WordError> {
        Word::new(&self.secret)
    }

    /// A previous game can be resumed only once a guess was made
    #[must_use]
    pub fn has_progress(&self) -> bool {
        !self.guesses.is_empty()
    }
}
