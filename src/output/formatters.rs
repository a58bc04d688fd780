//! Formatting utilities for results and the game clock

use crate::core::{BoardState, GameStatus, MAX_GUESSES, Mark, Row, Word};
use crate::share::share_link;

/// Marker appended to the score line when hard mode is on
pub const HARD_MODE_MARKER: &str = "*";

/// Format seconds as `mm:ss`, or `h:mm:ss` from one hour up
///
/// # Examples
/// ```
/// use wordle_engine::output::formatters::format_clock;
///
/// assert_eq!(format_clock(75), "01:15");
/// assert_eq!(format_clock(3_725), "1:02:05");
/// ```
#[must_use]
pub fn format_clock(seconds: u64) -> String {
    let (hours, minutes, seconds) = (seconds / 3600, seconds / 60 % 60, seconds % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Emoji blocks for a committed row; blanks and uncommitted cells are grey
#[must_use]
pub fn row_emoji(row: &Row) -> String {
    row.cells()
        .iter()
        .map(|cell| cell.mark().unwrap_or(Mark::Absent).emoji())
        .collect()
}

/// Spoiler-free text for sharing a finished game
///
/// ```text
/// <share link>
/// ????? (3/6) *
/// ⬜⬜🟩⬜🟩
/// ...
/// ```
#[must_use]
pub fn results_summary(
    board: &BoardState,
    secret: &Word,
    hard_mode: bool,
    base_url: Option<&str>,
) -> String {
    let guesses_made = if board.status() == GameStatus::Won {
        board.row_index().to_string()
    } else {
        "X".to_string()
    };

    let mut score = format!("{} ({guesses_made}/{MAX_GUESSES})", "?".repeat(secret.len()));
    if hard_mode {
        score.push(' ');
        score.push_str(HARD_MODE_MARKER);
    }

    let mut lines = vec![share_link(secret, base_url), score];
    lines.extend(board.committed_rows().map(row_emoji));
    lines.join("\n")
}

/// Headline for the results view
#[must_use]
pub fn results_message(status: GameStatus, secret: &Word) -> String {
    match status {
        GameStatus::Won => format!("Congratulations! You guessed the secret word {secret}"),
        GameStatus::Lost => format!("Too bad! The secret word was {secret}"),
        GameStatus::Active => String::new(),
    }
}
