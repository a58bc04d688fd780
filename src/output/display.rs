//! Colored terminal display for the line-oriented game

use colored::{ColoredString, Colorize};

use super::formatters::{format_clock, results_message, results_summary};
use crate::core::{BoardState, Cell, GameStatus, Mark, Word};
use crate::game::{KEYBOARD_ROWS, KeyState, Keyboard, Session};

fn cell_tile(cell: &Cell) -> ColoredString {
    let text = format!(" {} ", cell.character.unwrap_or(' '));
    match cell.mark() {
        Some(Mark::Exact) => text.black().on_green().bold(),
        Some(Mark::Present) => text.black().on_yellow().bold(),
        Some(Mark::Absent) => text.white().on_bright_black(),
        None if cell.character.is_some() => text.bold(),
        None => " · ".bright_black(),
    }
}

fn key_tile(letter: char, state: KeyState) -> ColoredString {
    let text = letter.to_string();
    match state {
        KeyState::Exact => text.green().bold(),
        KeyState::Present => text.yellow().bold(),
        KeyState::Absent => text.bright_black(),
        KeyState::Unused => text.normal(),
    }
}

/// Print every committed row plus the row being typed
pub fn print_board(board: &BoardState) {
    let shown = (board.row_index() + 1).min(board.rows().len());
    for row in &board.rows()[..shown] {
        let tiles: Vec<String> = row.cells().iter().map(|c| cell_tile(c).to_string()).collect();
        println!("  {}", tiles.join(""));
    }
}

/// Print the keyboard coloured by what is known about each letter
pub fn print_keyboard(keyboard: &Keyboard) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|letter| key_tile(letter, keyboard.state(letter)).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent), keys.join(" "));
    }
}

/// Print the outcome of a finished game with its share text
pub fn print_results(board: &BoardState, session: &Session, secret: &Word, base_url: Option<&str>) {
    println!("\n{}", "─".repeat(40).cyan());
    let message = results_message(board.status(), secret);
    match board.status() {
        GameStatus::Won => println!("{}", format!("✅ {message}").green().bold()),
        GameStatus::Lost => println!("{}", format!("❌ {message}").red().bold()),
        GameStatus::Active => return,
    }
    println!("   Time: {}", format_clock(session.elapsed_seconds).bright_yellow());
    println!("{}", "─".repeat(40).cyan());
    println!(
        "\n{}",
        results_summary(board, secret, session.options.hard_mode, base_url)
    );
}
