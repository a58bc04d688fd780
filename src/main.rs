//! Wordle - CLI
//!
//! Word-guessing game with a terminal UI, a plain line mode, share tokens and a
//! self-play engine audit.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use wordle_engine::{
    commands::{AuditConfig, print_audit_report, run_audit, run_simple, share_token},
    config::AppConfig,
    game::{Controller, Keyboard},
    logging,
    share::share_link,
    storage::JsonFileStore,
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Custom word list, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Word length for new games (4-8)
    #[arg(short = 'l', long, global = true)]
    length: Option<usize>,

    /// Play in hard mode: every clue must be reused in the next guess
    #[arg(long, global = true)]
    hard: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-oriented game on stdin/stdout
    Simple,

    /// Print the share token for a word
    Share {
        /// Word to share
        word: String,
    },

    /// Start a shared game from a token
    Open {
        /// Token produced by `share`
        token: String,
    },

    /// Self-play every word of the configured length and check the engine
    Audit {
        /// Limit number of games
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Seed for the self-playing guesser
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_default(&AppConfig::default_path())?,
    };

    if let Some(length) = cli.length {
        config.game.word_length = length;
    }
    if cli.hard {
        config.game.hard_mode = true;
    }
    if let Some(path) = &cli.wordlist {
        config.game.wordlist = Some(path.clone());
    }
    config.validate()?;
    Ok(config)
}

fn load_dictionary(config: &AppConfig) -> Result<WordList> {
    let dictionary = match &config.game.wordlist {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("reading word list {}", path.display()))?;
            WordList::new(words)
        }
        None => WordList::embedded(),
    };

    if dictionary.words_of_length(config.game.word_length).is_empty() {
        bail!(
            "word list has no {}-letter words",
            config.game.word_length
        );
    }
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // the TUI owns the terminal, so its logs go to a file
    let _guard = if matches!(command, Commands::Play) {
        Some(logging::init_file(&config.logging.log_dir, &config.logging.filter)?)
    } else {
        logging::init_stderr(&config.logging.filter);
        None
    };

    let dictionary = load_dictionary(&config)?;
    info!(words = dictionary.len(), "dictionary loaded");

    match command {
        Commands::Play => run_play_command(&config, &dictionary),
        Commands::Simple => run_simple_command(&config, &dictionary, None),
        Commands::Open { token } => run_simple_command(&config, &dictionary, Some(&token)),
        Commands::Share { word } => run_share_command(&config, &dictionary, &word),
        Commands::Audit { limit, seed } => run_audit_command(&config, &dictionary, limit, seed),
    }
}

fn controller<'a>(
    config: &AppConfig,
    dictionary: &'a WordList,
) -> Result<Controller<'a, Keyboard, JsonFileStore>> {
    let store = JsonFileStore::new(&config.storage.session_file);
    let controller = Controller::load(
        dictionary,
        Keyboard::new(),
        store,
        config.game_options(),
        config.controller_settings(),
    )?;
    Ok(controller)
}

fn run_play_command(config: &AppConfig, dictionary: &WordList) -> Result<()> {
    use wordle_engine::interactive::{App, run_tui};

    let mut controller = controller(config, dictionary)?;
    controller.initialize()?;

    let app = App::new(controller, config.share.base_url.clone());
    run_tui(app)
}

fn run_simple_command(config: &AppConfig, dictionary: &WordList, token: Option<&str>) -> Result<()> {
    let mut controller = controller(config, dictionary)?;
    match token {
        Some(token) => {
            if !controller.open_shared_link(token)? {
                eprintln!("{}", controller.board().error());
            }
        }
        None => controller.initialize()?,
    }

    run_simple(&mut controller, config.share.base_url.as_deref())
}

fn run_share_command(config: &AppConfig, dictionary: &WordList, word: &str) -> Result<()> {
    let token = share_token(word, dictionary)?;
    println!("{token}");

    let secret = wordle_engine::core::Word::new(word)?;
    println!("{}", share_link(&secret, config.share.base_url.as_deref()));
    Ok(())
}

fn run_audit_command(
    config: &AppConfig,
    dictionary: &WordList,
    limit: Option<usize>,
    seed: u64,
) -> Result<()> {
    println!("\n{}", "═".repeat(60));
    println!(" Wordle Engine Audit ");
    println!("{}", "═".repeat(60));
    println!(
        "\n{}-letter words, hard mode {}",
        config.game.word_length,
        if config.game.hard_mode { "on" } else { "off" }
    );

    let report = run_audit(
        dictionary,
        &AuditConfig {
            word_length: config.game.word_length,
            hard_mode: config.game.hard_mode,
            limit,
            seed,
            show_progress: true,
        },
    );
    print_audit_report(&report);

    if !report.is_clean() {
        bail!("{} games failed engine checks", report.failures.len());
    }
    Ok(())
}
