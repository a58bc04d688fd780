//! Engine audit
//!
//! Self-plays a game for every dictionary word of one length through the full
//! `Controller` and checks the engine's guarantees on each:
//! - the game reaches a terminal status exactly once
//! - replaying the saved guesses rebuilds identical rows and status
//! - no letter is ever marked exact or present more often than the secret holds it
//! - a player who only guesses words consistent with every clue so far is never
//!   refused (in hard mode too)

use std::time::{Duration, Instant};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;

use crate::core::{Evaluation, GameStatus, MAX_GUESSES, Mark, Word, evaluate};
use crate::error::GameError;
use crate::game::{Controller, ControllerSettings, GameOptions, Keyboard, KeyTracker, Session};
use crate::storage::MemoryStore;
use crate::wordlists::WordList;

/// Audit parameters
#[derive(Debug, Clone, Copy)]
pub struct AuditConfig {
    pub word_length: usize,
    pub hard_mode: bool,
    pub limit: Option<usize>,
    pub seed: u64,
    pub show_progress: bool,
}

/// Outcome of one self-played game
#[derive(Debug, Clone)]
pub struct GameAudit {
    pub secret: String,
    pub guesses: usize,
    pub status: GameStatus,
    pub problems: Vec<String>,
}

/// Aggregated audit results
#[derive(Debug)]
pub struct AuditReport {
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    /// `distribution[n]` games won in `n` guesses
    pub distribution: [usize; MAX_GUESSES + 1],
    pub failures: Vec<GameAudit>,
    pub total_time: Duration,
}

impl AuditReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run the audit over the dictionary
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
#[must_use]
pub fn run_audit(dictionary: &WordList, config: &AuditConfig) -> AuditReport {
    let secrets: Vec<&Word> = dictionary
        .words_of_length(config.word_length)
        .iter()
        .take(config.limit.unwrap_or(usize::MAX))
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{}-letter games", config.word_length));

    let start = Instant::now();
    let games: Vec<GameAudit> = secrets
        .par_iter()
        .enumerate()
        .map(|(i, secret)| {
            let seed = config.seed.wrapping_add(i as u64);
            let audit = audit_game(dictionary, secret, config.hard_mode, seed);
            pb.inc(1);
            audit
        })
        .collect();
    pb.finish_with_message("Complete!");

    let mut report = AuditReport {
        total_games: games.len(),
        won: 0,
        lost: 0,
        distribution: [0; MAX_GUESSES + 1],
        failures: Vec::new(),
        total_time: start.elapsed(),
    };
    for game in games {
        match game.status {
            GameStatus::Won => {
                report.won += 1;
                report.distribution[game.guesses.min(MAX_GUESSES)] += 1;
            }
            GameStatus::Lost => report.lost += 1,
            GameStatus::Active => {}
        }
        if !game.problems.is_empty() {
            report.failures.push(game);
        }
    }
    report
}

/// Self-play one game on `secret`
#[must_use]
pub fn audit_game(dictionary: &WordList, secret: &Word, hard_mode: bool, seed: u64) -> GameAudit {
    let mut audit = GameAudit {
        secret: secret.text().to_string(),
        guesses: 0,
        status: GameStatus::Active,
        problems: Vec::new(),
    };
    if let Err(e) = play_game(dictionary, secret, hard_mode, seed, &mut audit) {
        audit.problems.push(e.to_string());
    }
    audit
}

fn play_game(
    dictionary: &WordList,
    secret: &Word,
    hard_mode: bool,
    seed: u64,
    audit: &mut GameAudit,
) -> Result<(), GameError> {
    let settings = ControllerSettings {
        submit_delay: Duration::ZERO,
        autosave_seconds: 0,
    };
    let options = GameOptions {
        word_length: secret.len(),
        hard_mode,
    };
    let mut controller = Controller::new(
        dictionary,
        Keyboard::new(),
        MemoryStore::new(),
        Session::with_options(options),
        settings,
    )?;
    controller.start_shared_game(secret.clone());
    let updates = controller.subscribe();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut candidates: Vec<&Word> = dictionary.words_of_length(secret.len()).iter().collect();

    while controller.board().status() == GameStatus::Active {
        let Some(guess) = candidates.choose(&mut rng).copied() else {
            audit.problems.push("ran out of consistent candidates".to_string());
            break;
        };

        for c in guess.text().chars() {
            controller.submit_character(c);
        }
        controller.submit_guess();

        match controller.flush() {
            Some(Ok(evaluation)) => {
                if !within_letter_counts(secret, &evaluation) {
                    audit
                        .problems
                        .push(format!("{guess} over-reports letters: {}", evaluation.pattern()));
                }
                candidates.retain(|candidate| {
                    evaluate(candidate, guess.text()).pattern() == evaluation.pattern()
                });
            }
            Some(Err(rejection)) => {
                audit.problems.push(format!("{guess} refused: {rejection}"));
                break;
            }
            None => {
                audit.problems.push(format!("{guess} was never evaluated"));
                break;
            }
        }
    }

    audit.guesses = controller.session().guesses.len();
    audit.status = controller.board().status();

    let mut previous = GameStatus::Active;
    let mut endings = 0;
    for snapshot in updates.try_iter() {
        if snapshot.status() != previous && snapshot.status().is_terminal() {
            endings += 1;
        }
        previous = snapshot.status();
    }
    if endings != 1 {
        audit
            .problems
            .push(format!("game ended {endings} times, expected once"));
    }

    let mut replay = Controller::new(
        dictionary,
        ReplayTracker,
        MemoryStore::new(),
        controller.session().clone(),
        settings,
    )?;
    replay.initialize()?;
    if replay.board().rows() != controller.board().rows()
        || replay.board().status() != controller.board().status()
    {
        audit
            .problems
            .push("replayed session differs from live play".to_string());
    }

    Ok(())
}

/// Non-absent marks never exceed the secret's letter counts
fn within_letter_counts(secret: &Word, evaluation: &Evaluation) -> bool {
    let mut pool = secret.letter_pool();
    evaluation
        .guess()
        .bytes()
        .zip(evaluation.pattern().marks())
        .filter(|(_, mark)| **mark != Mark::Absent)
        .all(|(letter, _)| pool.take(letter))
}

/// Key tracker for replays, where only the board matters
struct ReplayTracker;

impl KeyTracker for ReplayTracker {
    fn reset(&mut self) {}

    fn register(&mut self, _guess: &str, _present_elsewhere: &[char], _exact: &[char]) {}
}

/// Print the audit report
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60));
    println!(" Engine Audit ");
    println!("{}", "═".repeat(60));

    let total = report.total_games.max(1) as f64;
    println!("\n📊 {}", "Games".bright_cyan().bold());
    println!("  Played:      {}", report.total_games);
    println!(
        "  Won:         {} {}",
        report.won,
        format!("({:.1}%)", report.won as f64 / total * 100.0).green()
    );
    println!(
        "  Lost:        {} {}",
        report.lost,
        format!("({:.1}%)", report.lost as f64 / total * 100.0).yellow()
    );
    println!("  Total time:  {:.2}s", report.total_time.as_secs_f64());

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = report.distribution.iter().copied().max().unwrap_or(0).max(1);
    for (guesses, &count) in report.distribution.iter().enumerate().skip(1) {
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses}: {bar} {count:4}");
    }

    println!();
    if report.is_clean() {
        println!("{}", "✅ All checks passed".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} games failed checks", report.failures.len())
                .red()
                .bold()
        );
        for game in report.failures.iter().take(10) {
            println!("  {}: {}", game.secret.yellow(), game.problems.join("; "));
        }
    }
}
