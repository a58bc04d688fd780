//! Collaborators the controller talks to
//!
//! The controller owns the game rules; everything else (where words come from,
//! how the on-screen keyboard is coloured, where sessions are saved) sits behind
//! these traits.

use super::Session;
use crate::core::Word;
use crate::error::StoreError;

/// Source of secrets and the authority on which guesses are real words
pub trait Dictionary {
    /// A random uppercase word of exactly `length` letters
    ///
    /// Returns `None` if the dictionary holds no word of that length.
    fn random_word(&self, length: usize) -> Option<Word>;

    /// Case-insensitive membership test
    fn contains(&self, word: &str) -> bool;
}

/// Accumulates per-letter knowledge across guesses
pub trait KeyTracker {
    /// Forget everything, called when a new game starts
    fn reset(&mut self);

    /// Record an accepted guess and the clues it revealed
    fn register(&mut self, guess: &str, present_elsewhere: &[char], exact: &[char]);
}

/// Saves and restores sessions
pub trait SessionStore {
    /// Save the session
    ///
    /// # Errors
    /// Returns `StoreError` if the session cannot be written.
    fn persist(&mut self, session: &Session) -> Result<(), StoreError>;

    /// Load the last saved session, `None` if nothing was saved yet
    ///
    /// # Errors
    /// Returns `StoreError` if saved data exists but cannot be read.
    fn load(&self) -> Result<Option<Session>, StoreError>;
}
