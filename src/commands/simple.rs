//! Simple line-oriented game
//!
//! Plays through stdin/stdout without the TUI: one guess per line, plus a few
//! `:` commands.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use colored::Colorize;

use crate::core::{Evaluation, GameStatus, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::error::GameError;
use crate::game::{Controller, GuessRejection, Keyboard, SessionStore};
use crate::output::{print_board, print_keyboard, print_results};
use crate::share::share_link;

/// What the loop should do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Board changed, show it again
    Redraw,
    /// Print this and keep going
    Say(String),
    Quit,
}

const HELP: &str = "Commands: :new  :concede  :hard  :length N  :share  :help  :quit";

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure or if a new game cannot be started.
pub fn run_simple<S: SessionStore>(
    controller: &mut Controller<'_, Keyboard, S>,
    base_url: Option<&str>,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║                W O R D L E               ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!("Guess the {}-letter word in six tries.", controller.secret().len());
    println!("{HELP}\n");

    show(controller, base_url);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut clock = Instant::now();

    loop {
        print!("{} ", ">".bright_cyan().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        advance_clock(controller, &mut clock);

        match handle_line(controller, &line, base_url)? {
            Step::Quit => break,
            Step::Say(text) => println!("{text}"),
            Step::Redraw => show(controller, base_url),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Apply one line of input to the game
///
/// # Errors
///
/// Returns `GameError` if `:new` cannot draw a secret.
pub fn handle_line<S: SessionStore>(
    controller: &mut Controller<'_, Keyboard, S>,
    line: &str,
    base_url: Option<&str>,
) -> Result<Step, GameError> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => Ok(Step::Redraw),
        ":q" | ":quit" | ":exit" => Ok(Step::Quit),
        ":h" | ":help" => Ok(Step::Say(HELP.to_string())),
        ":n" | ":new" => match controller.start_new_game() {
            Ok(()) => Ok(Step::Redraw),
            Err(GameError::NoWordsOfLength(length)) => Ok(Step::Say(format!(
                "No {length}-letter words in the word list"
            ))),
            Err(e) => Err(e),
        },
        ":c" | ":concede" => {
            controller.concede();
            Ok(Step::Redraw)
        }
        ":hard" => {
            let enabled = !controller.session().options.hard_mode;
            controller.set_hard_mode(enabled);
            Ok(Step::Say(format!(
                "Hard mode {}",
                if enabled { "on" } else { "off" }
            )))
        }
        command if command.starts_with(":length") || command.starts_with(":l ") => {
            Ok(Step::Say(set_length(controller, command)))
        }
        ":s" | ":share" => Ok(Step::Say(share_link(controller.secret(), base_url))),
        word if word.starts_with(':') => Ok(Step::Say(format!("Unknown command {word}. {HELP}"))),
        _ => {
            if controller.board().status().is_terminal() {
                return Ok(Step::Say("Game over. Type :new to play again.".to_string()));
            }
            if line.chars().count() > controller.secret().len() {
                return Ok(Step::Say("Too many letters".to_string()));
            }
            enter_guess(controller, line);
            Ok(Step::Redraw)
        }
    }
}

/// `:length N` picks the word length of the next new game
fn set_length<S: SessionStore>(controller: &mut Controller<'_, Keyboard, S>, command: &str) -> String {
    let length = command
        .split_whitespace()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .filter(|length| (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(length));

    match length {
        Some(length) => {
            controller.set_word_length(length);
            format!("Next game uses {length}-letter words. Type :new to start it.")
        }
        None => format!("Usage: :length N with N from {MIN_WORD_LENGTH} to {MAX_WORD_LENGTH}"),
    }
}

/// Replace the current row with `word` and submit it right away
fn enter_guess<S: SessionStore>(
    controller: &mut Controller<'_, Keyboard, S>,
    word: &str,
) -> Option<Result<Evaluation, GuessRejection>> {
    while controller.remove_last_character() {}
    for c in word.chars() {
        controller.submit_character(c);
    }
    controller.submit_guess();
    let outcome = controller.flush();

    // a rejected row stays typed in; clear it so the next line starts fresh
    if matches!(outcome, Some(Err(_))) {
        let error = controller.board().error().to_string();
        while controller.remove_last_character() {}
        println!("{}", format!("❌ {error}").red());
    }
    outcome
}

fn advance_clock<S: SessionStore>(controller: &mut Controller<'_, Keyboard, S>, since: &mut Instant) {
    let whole = since.elapsed().as_secs();
    for _ in 0..whole {
        controller.tick();
    }
    *since += Duration::from_secs(whole);
}

fn show<S: SessionStore>(controller: &Controller<'_, Keyboard, S>, base_url: Option<&str>) {
    let board = controller.board();
    println!();
    print_board(board);
    println!();
    print_keyboard(controller.key_tracker());
    println!();

    if board.status() != GameStatus::Active {
        print_results(board, controller.session(), controller.secret(), base_url);
        println!("\nType :new to play again or :quit to leave.");
    }
}
