//! Core domain types for the puzzle
//!
//! Pure, deterministic building blocks: words, the letter multiset, guess
//! evaluation, the board model, hard-mode checking and status derivation.
//! Nothing in here performs I/O.

mod board;
mod evaluator;
mod hard_mode;
mod letters;
mod pattern;
mod status;
mod word;

pub use board::{BoardState, Cell, GameStatus, MAX_GUESSES, Row};
pub use evaluator::{Evaluation, evaluate};
pub use hard_mode::{HardModeViolation, check_hard_mode, ordinal};
pub use letters::LetterPool;
pub use pattern::{Mark, Pattern};
pub use status::derive_status;
pub use word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError};
