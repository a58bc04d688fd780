//! Submission gate
//!
//! Checks run in order and the first failure wins:
//! 1. A guess equal to the secret is always accepted
//! 2. Length: non-blank and exactly as long as the secret
//! 3. Repetition: not already guessed this game
//! 4. Hard mode: reuses the previous row's clues (when enabled, after row one)
//! 5. Dictionary membership

use super::Dictionary;
use crate::core::{HardModeViolation, Row, Word, check_hard_mode};

/// Why a submitted guess was refused
///
/// The `Display` text is the message shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessRejection {
    #[error("Not enough letters")]
    InsufficientLetters,
    #[error("Already guessed")]
    AlreadyGuessed,
    #[error(transparent)]
    HardMode(#[from] HardModeViolation),
    #[error("Not in word list")]
    NotInDictionary,
}

/// Everything the gate needs to know about the game in progress
pub struct GuessContext<'a> {
    pub secret: &'a Word,
    pub previous_guesses: &'a [String],
    pub hard_mode: bool,
    /// Most recently committed row, `None` before the first guess
    pub previous_row: Option<&'a Row>,
    pub dictionary: &'a dyn Dictionary,
}

/// Run the submission checks for `guess`
///
/// # Errors
/// Returns the first `GuessRejection` that applies.
pub fn validate_guess(guess: &str, context: &GuessContext<'_>) -> Result<(), GuessRejection> {
    if context.secret.matches(guess) {
        return Ok(());
    }

    if guess.trim().is_empty() || guess.chars().count() != context.secret.len() {
        return Err(GuessRejection::InsufficientLetters);
    }

    if context
        .previous_guesses
        .iter()
        .any(|previous| previous.eq_ignore_ascii_case(guess))
    {
        return Err(GuessRejection::AlreadyGuessed);
    }

    if context.hard_mode
        && let Some(previous_row) = context.previous_row
    {
        check_hard_mode(previous_row, guess)?;
    }

    if !context.dictionary.contains(guess) {
        return Err(GuessRejection::NotInDictionary);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardState, evaluate};
    use crate::wordlists::WordList;

    struct Fixture {
        secret: Word,
        dictionary: WordList,
        guesses: Vec<String>,
        board: BoardState,
        hard_mode: bool,
    }

    impl Fixture {
        fn new(secret: &str) -> Self {
            let secret = Word::new(secret).unwrap();
            Self {
                board: BoardState::new(secret.len()),
                secret,
                dictionary: WordList::from_slice(&[
                    "alter", "atone", "abide", "blast", "slate", "crane",
                ]),
                guesses: Vec::new(),
                hard_mode: false,
            }
        }

        fn play(&mut self, guess: &str) {
            self.board.commit_row(&evaluate(&self.secret, guess));
            self.guesses.push(guess.to_string());
        }

        fn check(&self, guess: &str) -> Result<(), GuessRejection> {
            let context = GuessContext {
                secret: &self.secret,
                previous_guesses: &self.guesses,
                hard_mode: self.hard_mode,
                previous_row: self.board.previous_row(),
                dictionary: &self.dictionary,
            };
            validate_guess(guess, &context)
        }
    }

    #[test]
    fn accepts_dictionary_word() {
        let fixture = Fixture::new("alter");
        assert_eq!(fixture.check("SLATE"), Ok(()));
    }

    #[test]
    fn rejects_short_or_blank_guess() {
        let fixture = Fixture::new("alter");

        assert_eq!(fixture.check(""), Err(GuessRejection::InsufficientLetters));
        assert_eq!(fixture.check("     "), Err(GuessRejection::InsufficientLetters));
        assert_eq!(fixture.check("ALT"), Err(GuessRejection::InsufficientLetters));
        assert_eq!(
            GuessRejection::InsufficientLetters.to_string(),
            "Not enough letters"
        );
    }

    #[test]
    fn rejects_repeat() {
        let mut fixture = Fixture::new("alter");
        fixture.play("SLATE");

        let err = fixture.check("SLATE").unwrap_err();
        assert_eq!(err, GuessRejection::AlreadyGuessed);
        assert_eq!(err.to_string(), "Already guessed");
    }

    #[test]
    fn rejects_unknown_word() {
        let fixture = Fixture::new("alter");

        let err = fixture.check("QWERT").unwrap_err();
        assert_eq!(err, GuessRejection::NotInDictionary);
        assert_eq!(err.to_string(), "Not in word list");
    }

    #[test]
    fn secret_bypasses_every_check() {
        let mut fixture = Fixture::new("humans");
        fixture.hard_mode = true;
        fixture.play("ALTERS");

        // not in the fixture dictionary and ignores the hard-mode clue, still accepted
        assert_eq!(fixture.check("humans"), Ok(()));
    }

    #[test]
    fn hard_mode_checks_previous_row() {
        let mut fixture = Fixture::new("alter");
        fixture.hard_mode = true;
        fixture.play("ATONE");

        assert_eq!(
            fixture.check("BLAST").unwrap_err().to_string(),
            "First letter must be A"
        );
        assert_eq!(
            fixture.check("ABIDE").unwrap_err(),
            GuessRejection::HardMode(HardModeViolation::MissingLetter('T'))
        );
    }

    #[test]
    fn hard_mode_off_ignores_clues() {
        let mut fixture = Fixture::new("alter");
        fixture.play("ATONE");

        assert_eq!(fixture.check("BLAST"), Ok(()));
    }

    #[test]
    fn hard_mode_skipped_on_first_guess() {
        let mut fixture = Fixture::new("alter");
        fixture.hard_mode = true;

        assert_eq!(fixture.check("BLAST"), Ok(()));
    }

    #[test]
    fn hard_mode_is_checked_before_dictionary() {
        let mut fixture = Fixture::new("alter");
        fixture.hard_mode = true;
        fixture.play("ATONE");

        // not a word and violates the A clue: hard mode message wins
        assert_eq!(
            fixture.check("QWERT").unwrap_err().to_string(),
            "First letter must be A"
        );
    }

    #[test]
    fn repeat_is_checked_before_hard_mode() {
        let mut fixture = Fixture::new("alter");
        fixture.hard_mode = true;
        fixture.play("SLATE");
        fixture.play("ATONE");

        assert_eq!(fixture.check("SLATE"), Err(GuessRejection::AlreadyGuessed));
    }
}
