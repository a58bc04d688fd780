//! TUI application state and logic

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

use crate::core::{BoardState, GameStatus};
use crate::game::{Controller, Keyboard, SessionStore};
use crate::output::{format_clock, results_message, results_summary};

/// How long the event loop waits for a key before polling the controller
const FRAME: Duration = Duration::from_millis(50);
const CLOCK_TICK: Duration = Duration::from_secs(1);
const MAX_MESSAGES: usize = 5;

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a, S: SessionStore> {
    pub controller: Controller<'a, Keyboard, S>,
    /// Latest board published by the controller
    pub board: Arc<BoardState>,
    pub messages: Vec<Message>,
    pub show_results: bool,
    pub should_quit: bool,
    pub base_url: Option<String>,
    updates: Receiver<Arc<BoardState>>,
}

impl<'a, S: SessionStore> App<'a, S> {
    pub fn new(mut controller: Controller<'a, Keyboard, S>, base_url: Option<String>) -> Self {
        let updates = controller.subscribe();
        let board = controller.snapshot();
        let show_results = board.status().is_terminal();

        Self {
            controller,
            board,
            messages: vec![Message {
                text: "Type a word and press Enter. Ctrl-N new game, Ctrl-G give up.".to_string(),
                style: MessageStyle::Info,
            }],
            show_results,
            should_quit: false,
            base_url,
            updates,
        }
    }

    /// Pick up every snapshot published since the last call
    pub fn sync(&mut self) {
        let was_active = self.board.status() == GameStatus::Active;
        while let Ok(board) = self.updates.try_recv() {
            self.board = board;
        }

        if was_active && self.board.status().is_terminal() {
            self.show_results = true;
            let style = if self.board.status() == GameStatus::Won {
                MessageStyle::Success
            } else {
                MessageStyle::Error
            };
            let message = results_message(self.board.status(), self.controller.secret());
            self.add_message(&message, style);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => {
                if self.show_results {
                    self.show_results = false;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('g') if ctrl => self.controller.concede(),
            KeyCode::Char('t') if ctrl => self.toggle_hard_mode(),
            KeyCode::Char(c) if !ctrl => {
                self.controller.submit_character(c);
            }
            KeyCode::Backspace => {
                self.controller.remove_last_character();
            }
            KeyCode::Enter if self.show_results => self.new_game(),
            KeyCode::Enter => {
                self.controller.submit_guess();
            }
            _ => {}
        }
        self.sync();
    }

    /// Run a pending submission whose delay has elapsed
    pub fn poll(&mut self, now: Instant) {
        if self.controller.poll(now).is_some() {
            self.sync();
        }
    }

    /// One second of game time
    pub fn on_second(&mut self) {
        self.controller.tick();
    }

    pub fn new_game(&mut self) {
        match self.controller.start_new_game() {
            Ok(()) => {
                self.show_results = false;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => {
                error!(error = %e, "could not start a new game");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
        self.sync();
    }

    fn toggle_hard_mode(&mut self) {
        let enabled = !self.controller.session().options.hard_mode;
        self.controller.set_hard_mode(enabled);
        let state = if enabled { "on" } else { "off" };
        self.add_message(&format!("Hard mode {state}"), MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn clock(&self) -> String {
        format_clock(self.controller.session().elapsed_seconds)
    }

    /// Share text for the finished game
    #[must_use]
    pub fn results_text(&self) -> String {
        results_summary(
            &self.board,
            self.controller.secret(),
            self.controller.session().options.hard_mode,
            self.base_url.as_deref(),
        )
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SessionStore>(app: App<'_, S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = %err, "terminal UI failed");
    }
    res
}

fn run_app<B: ratatui::backend::Backend, S: SessionStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    info!("terminal UI started");
    let mut next_second = Instant::now() + CLOCK_TICK;

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(FRAME)?
            && let Event::Key(key) = event::read()?
            // Only key presses: Windows also reports releases
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        let now = Instant::now();
        app.poll(now);
        while now >= next_second {
            app.on_second();
            next_second += CLOCK_TICK;
        }

        if app.should_quit {
            break;
        }
    }

    info!("terminal UI closed");
    Ok(())
}
