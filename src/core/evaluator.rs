//! Guess evaluation against the secret
//!
//! # Algorithm
//! 1. First pass: mark every exact position and consume one occurrence of that
//!    letter from a pool built from the secret
//! 2. Second pass: for every position not marked exact, mark it present if the
//!    pool still holds that letter, consuming one occurrence
//!
//! Running all exact matches before any presence check is what keeps a letter
//! from counting as both exact and present, and from being reported present
//! more often than it still occurs in the secret.

use super::{Mark, Pattern, Word};

/// Result of scoring one guess against the secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    guess: String,
    pattern: Pattern,
    exact_clues: Vec<(usize, char)>,
    present_clues: Vec<char>,
}

impl Evaluation {
    /// The guess as evaluated (uppercase, blanks preserved)
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Letters confirmed at their position
    #[must_use]
    pub fn exact_clues(&self) -> &[(usize, char)] {
        &self.exact_clues
    }

    /// Letters confirmed present somewhere else, in guess order
    #[must_use]
    pub fn present_clues(&self) -> &[char] {
        &self.present_clues
    }

    /// Exact letters without their positions, in guess order
    #[must_use]
    pub fn exact_letters(&self) -> Vec<char> {
        self.exact_clues.iter().map(|&(_, letter)| letter).collect()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.pattern.is_perfect()
    }
}

/// Score `guess` against `secret`
///
/// `guess` is expected to be as long as the secret. Non-letter characters (the
/// blank placeholders written when a game is conceded) are always `Absent`.
/// Positions beyond the end of a short guess are ignored.
///
/// # Examples
/// ```
/// use wordle_engine::core::{Word, Mark, evaluate};
///
/// let secret = Word::new("alloy").unwrap();
/// let evaluation = evaluate(&secret, "LLAMA");
///
/// assert_eq!(
///     evaluation.pattern().marks(),
///     &[Mark::Present, Mark::Exact, Mark::Present, Mark::Absent, Mark::Absent]
/// );
/// assert_eq!(evaluation.present_clues(), &['L', 'A']);
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &str) -> Evaluation {
    let guess_letters: Vec<Option<u8>> = guess
        .chars()
        .take(secret.len())
        .map(|ch| {
            ch.is_ascii_alphabetic()
                .then(|| ch.to_ascii_uppercase() as u8)
        })
        .collect();

    let mut marks = vec![Mark::Absent; guess_letters.len()];
    let mut available = secret.letter_pool();
    let mut exact_clues = Vec::new();
    let mut present_clues = Vec::new();

    for (i, letter) in guess_letters.iter().enumerate() {
        if let Some(letter) = *letter
            && letter == secret.letter_at(i)
        {
            marks[i] = Mark::Exact;
            available.take(letter);
            exact_clues.push((i, char::from(letter)));
        }
    }

    for (i, letter) in guess_letters.iter().enumerate() {
        if marks[i] == Mark::Exact {
            continue;
        }
        if let Some(letter) = *letter
            && available.take(letter)
        {
            marks[i] = Mark::Present;
            present_clues.push(char::from(letter));
        }
    }

    let guess = guess_letters
        .iter()
        .map(|letter| letter.map_or(' ', char::from))
        .collect();

    Evaluation {
        guess,
        pattern: Pattern::new(marks),
        exact_clues,
        present_clues,
    }
}
