//! Hard-mode constraint check
//!
//! In hard mode every guess after the first must reuse the clues revealed by the
//! row immediately before it: exact letters stay in place and present letters
//! appear somewhere in the guess. Only that single row is consulted. Each row is
//! scored against the same secret, so the latest row already carries whatever
//! the player chose to keep from earlier ones.

use super::{LetterPool, Row};
use std::fmt;

/// Why a hard-mode guess was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardModeViolation {
    MisplacedExact { position: usize, letter: char },
    MissingLetter(char),
    MissingLetters(Vec<char>),
}

impl fmt::Display for HardModeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MisplacedExact { position, letter } => {
                write!(f, "{} letter must be {letter}", ordinal(*position))
            }
            Self::MissingLetter(letter) => write!(f, "Guess must contain {letter}"),
            Self::MissingLetters(letters) => {
                write!(f, "Guess must contain {}", join_letters(letters))
            }
        }
    }
}

impl std::error::Error for HardModeViolation {}

/// Check `guess` against the clues of `previous`
///
/// Positional violations are reported first, and only the first one found;
/// missing present letters are only checked when every exact letter is in
/// place.
///
/// # Errors
/// Returns the `HardModeViolation` describing the first unmet clue.
///
/// # Examples
/// ```
/// use wordle_engine::core::{BoardState, Word, evaluate, check_hard_mode};
///
/// let secret = Word::new("crane").unwrap();
/// let mut board = BoardState::new(5);
/// board.commit_row(&evaluate(&secret, "CLEAR"));
/// let previous = board.previous_row().unwrap();
///
/// assert!(check_hard_mode(previous, "CRANE").is_ok());
/// assert_eq!(
///     check_hard_mode(previous, "TRACE").unwrap_err().to_string(),
///     "First letter must be C"
/// );
/// ```
pub fn check_hard_mode(previous: &Row, guess: &str) -> Result<(), HardModeViolation> {
    let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
    let mut required = LetterPool::new();

    for (position, cell) in previous.cells().iter().enumerate() {
        let Some(letter) = cell.character else {
            continue;
        };

        if cell.is_exact_match && guess.get(position) != Some(&letter) {
            return Err(HardModeViolation::MisplacedExact { position, letter });
        }

        if cell.is_present_elsewhere {
            required.insert(letter as u8);
        }
    }

    for &ch in &guess {
        if ch.is_ascii() {
            required.take(ch as u8);
        }
    }

    let missing: Vec<char> = required.remaining().into_iter().map(char::from).collect();
    match missing.as_slice() {
        [] => Ok(()),
        [letter] => Err(HardModeViolation::MissingLetter(*letter)),
        _ => Err(HardModeViolation::MissingLetters(missing)),
    }
}

/// Ordinal name for a zero-based position
#[must_use]
pub fn ordinal(position: usize) -> &'static str {
    match position {
        1 => "Second",
        2 => "Third",
        3 => "Fourth",
        4 => "Fifth",
        5 => "Sixth",
        6 => "Seventh",
        7 => "Eighth",
        _ => "First",
    }
}

fn join_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
