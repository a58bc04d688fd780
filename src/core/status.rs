//! Game status derivation

use super::{GameStatus, Word};

/// Derive the status of a game from its guess history
///
/// `Won` if any guess spells the secret, `Lost` once `max_guesses` guesses have
/// been made without a match, `Active` otherwise. The history is scanned from the
/// most recent guess backwards since a win is almost always the last entry.
///
/// # Examples
/// ```
/// use wordle_engine::core::{GameStatus, Word, derive_status};
///
/// let secret = Word::new("crane").unwrap();
/// let guesses = vec!["SLATE".to_string(), "CRANE".to_string()];
/// assert_eq!(derive_status(&guesses, &secret, 6), GameStatus::Won);
/// ```
#[must_use]
pub fn derive_status<S: AsRef<str>>(guesses: &[S], secret: &Word, max_guesses: usize) -> GameStatus {
    if guesses.iter().rev().any(|guess| secret.matches(guess.as_ref())) {
        return GameStatus::Won;
    }

    if guesses.len() >= max_guesses {
        return GameStatus::Lost;
    }

    GameStatus::Active
}
