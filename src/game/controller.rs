//! Game controller
//!
//! The only writer of the board. Input events come in as method calls, the
//! controller runs them through the submission gate and the evaluator, updates
//! the board, the key tracker and the session, and pushes a fresh immutable
//! snapshot to every subscriber.
//!
//! # Submission scheduling
//! `request_submit` only arms a deadline; the guess is evaluated by the first
//! `poll` at or after it (or by `flush`). While a submission is pending every
//! further submit and edit is ignored, so submissions are processed strictly
//! one at a time.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::validator::{GuessContext, GuessRejection, validate_guess};
use super::{Dictionary, GameOptions, KeyTracker, Session, SessionStore};
use crate::core::{BoardState, Evaluation, GameStatus, MAX_GUESSES, Word, derive_status, evaluate};
use crate::error::GameError;
use crate::share;

/// Message shown when a share token cannot start a game
pub const INVALID_SHARE_LINK: &str = "Invalid share link";

/// Timing knobs for a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Delay between a submit request and the evaluation
    pub submit_delay: Duration,
    /// Persist every this many timer ticks, 0 disables autosave
    pub autosave_seconds: u64,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(100),
            autosave_seconds: 30,
        }
    }
}

/// Owns one game and its collaborators
pub struct Controller<'a, K: KeyTracker, S: SessionStore> {
    dictionary: &'a dyn Dictionary,
    key_tracker: K,
    store: S,
    session: Session,
    secret: Word,
    board: Arc<BoardState>,
    observers: Vec<Sender<Arc<BoardState>>>,
    pending_submit: Option<Instant>,
    settings: ControllerSettings,
}

impl<'a, K: KeyTracker, S: SessionStore> Controller<'a, K, S> {
    /// Wrap `session` without touching the board
    ///
    /// The stored secret is kept when it is a valid word, otherwise a random
    /// one is drawn. Call [`initialize`](Self::initialize) to resume or start
    /// the game.
    ///
    /// # Errors
    /// Returns `GameError::NoWordsOfLength` if a secret has to be drawn and the
    /// dictionary has no word of the configured length.
    pub fn new(
        dictionary: &'a dyn Dictionary,
        key_tracker: K,
        store: S,
        mut session: Session,
        settings: ControllerSettings,
    ) -> Result<Self, GameError> {
        let secret = match session.secret_word() {
            Ok(secret) => secret,
            Err(_) => {
                let secret = draw_secret(dictionary, session.options.word_length)?;
                session.secret = secret.text().to_string();
                session.guesses.clear();
                secret
            }
        };

        Ok(Self {
            dictionary,
            key_tracker,
            store,
            board: Arc::new(BoardState::new(secret.len())),
            session,
            secret,
            observers: Vec::new(),
            pending_submit: None,
            settings,
        })
    }

    /// Build from whatever `store` holds
    ///
    /// A save with guesses in it keeps its own options so the resumed game is
    /// played as it was started. Otherwise `options` apply to the next game. An
    /// unreadable save is logged and replaced by a fresh session.
    ///
    /// # Errors
    /// See [`new`](Self::new).
    pub fn load(
        dictionary: &'a dyn Dictionary,
        key_tracker: K,
        store: S,
        options: GameOptions,
        settings: ControllerSettings,
    ) -> Result<Self, GameError> {
        let mut session = match store.load() {
            Ok(Some(session)) => session,
            Ok(None) => Session::default(),
            Err(e) => {
                warn!(error = %e, "discarding unreadable session");
                Session::default()
            }
        };
        if session.has_progress() {
            debug!(
                hard_mode = session.options.hard_mode,
                "keeping options of saved game"
            );
        } else {
            session.options = options;
        }
        Self::new(dictionary, key_tracker, store, session, settings)
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Shared handle to the current board
    #[must_use]
    pub fn snapshot(&self) -> Arc<BoardState> {
        Arc::clone(&self.board)
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn key_tracker(&self) -> &K {
        &self.key_tracker
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn is_submit_pending(&self) -> bool {
        self.pending_submit.is_some()
    }

    /// Receive every board snapshot published from now on
    pub fn subscribe(&mut self) -> Receiver<Arc<BoardState>> {
        let (tx, rx) = mpsc::channel();
        self.observers.push(tx);
        rx
    }

    /// Resume the stored game if a guess was made, otherwise start a new one
    ///
    /// # Errors
    /// See [`start_new_game`](Self::start_new_game).
    pub fn initialize(&mut self) -> Result<(), GameError> {
        if self.session.has_progress() {
            let guesses = std::mem::take(&mut self.session.guesses);
            self.resume_session(guesses);
            Ok(())
        } else {
            self.start_new_game()
        }
    }

    /// Draw a new secret of the configured length and reset everything
    ///
    /// # Errors
    /// Returns `GameError::NoWordsOfLength` if the dictionary has no word of the
    /// configured length. The current game is left untouched in that case.
    pub fn start_new_game(&mut self) -> Result<(), GameError> {
        let secret = draw_secret(self.dictionary, self.session.options.word_length)?;
        info!(length = secret.len(), "starting new game");
        self.reset_with(secret, false);
        Ok(())
    }

    /// Start a game on a secret supplied from outside
    ///
    /// The caller must already have checked that `secret` is in the
    /// dictionary. The configured word length follows the secret.
    pub fn start_shared_game(&mut self, secret: Word) {
        info!(length = secret.len(), "starting shared game");
        self.session.options.word_length = secret.len();
        self.reset_with(secret, true);
    }

    /// Decode `token` and start a shared game from it
    ///
    /// A malformed token falls back to [`initialize`](Self::initialize) and
    /// leaves `Invalid share link` in the board's error. Returns whether the
    /// shared game was started.
    ///
    /// # Errors
    /// Only fails if the fallback fails.
    pub fn open_shared_link(&mut self, token: &str) -> Result<bool, GameError> {
        match share::decode(token, self.dictionary) {
            Ok(secret) => {
                self.start_shared_game(secret);
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "rejected share token");
                self.initialize()?;
                Arc::make_mut(&mut self.board).set_error(INVALID_SHARE_LINK);
                self.publish();
                Ok(false)
            }
        }
    }

    /// Rebuild the board by replaying `guesses` against the current secret
    ///
    /// Replaying is deterministic: the rows match what live play produced.
    /// A finished game is marked finished without further input.
    pub fn resume_session(&mut self, mut guesses: Vec<String>) {
        if guesses.len() > MAX_GUESSES {
            warn!(
                count = guesses.len(),
                "stored session has too many guesses, truncating"
            );
            guesses.truncate(MAX_GUESSES);
        }

        let mut board = BoardState::new(self.secret.len());
        self.key_tracker.reset();
        for guess in &guesses {
            let evaluation = evaluate(&self.secret, guess);
            board.commit_row(&evaluation);
            self.register_keys(&evaluation);
        }

        debug!(guesses = guesses.len(), "resumed session");
        self.session.guesses = guesses;
        self.board = Arc::new(board);
        self.pending_submit = None;
        self.update_status();
        self.publish();
    }

    /// Give up: fill the remaining rows with blanks and lose
    ///
    /// Does nothing once the game has ended.
    pub fn concede(&mut self) {
        if self.board.status().is_terminal() {
            return;
        }

        let blank = " ".repeat(self.secret.len());
        let board = Arc::make_mut(&mut self.board);
        while self.session.guesses.len() < MAX_GUESSES {
            board.commit_row(&evaluate(&self.secret, &blank));
            self.session.guesses.push(blank.clone());
        }
        board.finish(GameStatus::Lost);
        self.pending_submit = None;

        info!(secret = %self.secret, "game conceded");
        self.persist();
        self.publish();
    }

    /// Switch hard mode, taking effect from the next submission
    pub fn set_hard_mode(&mut self, enabled: bool) {
        self.session.options.hard_mode = enabled;
        self.persist();
    }

    /// Word length used by the next new game
    pub fn set_word_length(&mut self, length: usize) {
        self.session.options.word_length = length;
        self.persist();
    }

    /// Type a letter into the current row
    ///
    /// Anything but `a-z`/`A-Z` is ignored, as is input once the game has ended
    /// or while a submission is pending. Returns whether the board changed.
    pub fn submit_character(&mut self, ch: char) -> bool {
        if !ch.is_ascii_alphabetic() || !self.accepts_input() {
            return false;
        }

        let changed = Arc::make_mut(&mut self.board).push_letter(ch.to_ascii_uppercase());
        if changed {
            self.publish();
        }
        changed
    }

    /// Delete the last typed letter
    pub fn remove_last_character(&mut self) -> bool {
        if !self.accepts_input() || self.board.column_index().is_none() {
            return false;
        }

        let changed = Arc::make_mut(&mut self.board).pop_letter();
        if changed {
            self.publish();
        }
        changed
    }

    /// Schedule the current row for submission after the configured delay
    pub fn submit_guess(&mut self) -> bool {
        self.request_submit(Instant::now())
    }

    /// Schedule the current row for submission, counting the delay from `now`
    ///
    /// Returns `false` if a submission is already pending or the game has
    /// ended.
    pub fn request_submit(&mut self, now: Instant) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.pending_submit = Some(now + self.settings.submit_delay);
        true
    }

    /// Process the pending submission if its delay has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<Result<Evaluation, GuessRejection>> {
        match self.pending_submit {
            Some(deadline) if now >= deadline => self.flush(),
            _ => None,
        }
    }

    /// Process the pending submission immediately
    pub fn flush(&mut self) -> Option<Result<Evaluation, GuessRejection>> {
        self.pending_submit.take()?;
        if self.board.status().is_terminal() {
            return None;
        }
        Some(self.process_submission())
    }

    /// Advance the game clock by one second
    ///
    /// The clock only runs while the game is active and a guess has been made.
    /// Returns whether it advanced.
    pub fn tick(&mut self) -> bool {
        if self.board.status().is_terminal() || !self.session.has_progress() {
            return false;
        }

        self.session.elapsed_seconds += 1;
        let every = self.settings.autosave_seconds;
        if every > 0 && self.session.elapsed_seconds % every == 0 {
            debug!(elapsed = self.session.elapsed_seconds, "autosave");
            self.persist();
        }
        true
    }

    fn accepts_input(&self) -> bool {
        self.board.status() == GameStatus::Active && self.pending_submit.is_none()
    }

    fn process_submission(&mut self) -> Result<Evaluation, GuessRejection> {
        let guess = self.board.current_guess();

        let verdict = validate_guess(
            &guess,
            &GuessContext {
                secret: &self.secret,
                previous_guesses: &self.session.guesses,
                hard_mode: self.session.options.hard_mode,
                previous_row: self.board.previous_row(),
                dictionary: self.dictionary,
            },
        );
        if let Err(rejection) = verdict {
            debug!(%guess, %rejection, "guess rejected");
            Arc::make_mut(&mut self.board).set_error(rejection.to_string());
            self.publish();
            return Err(rejection);
        }

        let evaluation = evaluate(&self.secret, &guess);
        debug!(%guess, pattern = %evaluation.pattern(), "guess accepted");

        Arc::make_mut(&mut self.board).commit_row(&evaluation);
        self.register_keys(&evaluation);
        self.session.guesses.push(evaluation.guess().to_string());
        self.persist();
        self.update_status();
        self.publish();
        Ok(evaluation)
    }

    fn register_keys(&mut self, evaluation: &Evaluation) {
        self.key_tracker.register(
            evaluation.guess(),
            evaluation.present_clues(),
            &evaluation.exact_letters(),
        );
    }

    fn update_status(&mut self) {
        let status = derive_status(&self.session.guesses, &self.secret, MAX_GUESSES);
        if status.is_terminal() && Arc::make_mut(&mut self.board).finish(status) {
            info!(
                ?status,
                secret = %self.secret,
                guesses = self.session.guesses.len(),
                "game over"
            );
            self.persist();
        }
    }

    fn reset_with(&mut self, secret: Word, shared: bool) {
        self.session.secret = secret.text().to_string();
        self.session.guesses.clear();
        self.session.shared = shared;
        self.session.elapsed_seconds = 0;
        self.board = Arc::new(BoardState::new(secret.len()));
        self.secret = secret;
        self.pending_submit = None;
        self.key_tracker.reset();
        self.persist();
        self.publish();
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.persist(&self.session) {
            warn!(error = %e, "failed to save session");
        }
    }

    fn publish(&mut self) {
        let board = &self.board;
        self.observers
            .retain(|observer| observer.send(Arc::clone(board)).is_ok());
    }
}

fn draw_secret(dictionary: &dyn Dictionary, length: usize) -> Result<Word, GameError> {
    dictionary
        .random_word(length)
        .ok_or(GameError::NoWordsOfLength(length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use crate::error::StoreError;
    use crate::game::Keyboard;
    use crate::game::KeyState;
    use crate::storage::MemoryStore;
    use crate::wordlists::WordList;

    const WORDS: &[&str] = &[
        "crane", "slate", "alter", "atone", "blast", "train", "scare", "bland", "giant",
        "tides", "humans", "abide", "tide",
    ];

    fn instant_settings() -> ControllerSettings {
        ControllerSettings {
            submit_delay: Duration::ZERO,
            autosave_seconds: 3,
        }
    }

    fn controller<'a>(dictionary: &'a WordList, secret: &str) -> Controller<'a, Keyboard, MemoryStore> {
        let mut controller = Controller::new(
            dictionary,
            Keyboard::new(),
            MemoryStore::new(),
            Session::default(),
            instant_settings(),
        )
        .unwrap();
        controller.start_shared_game(Word::new(secret).unwrap());
        controller
    }

    fn type_word<K: KeyTracker, S: SessionStore>(controller: &mut Controller<'_, K, S>, word: &str) {
        for ch in word.chars() {
            controller.submit_character(ch);
        }
    }

    fn play<K: KeyTracker, S: SessionStore>(
        controller: &mut Controller<'_, K, S>,
        word: &str,
    ) -> Result<Evaluation, GuessRejection> {
        type_word(controller, word);
        assert!(controller.submit_guess());
        controller.flush().expect("submission pending")
    }

    /// Records every registration it receives
    #[derive(Default)]
    struct RecordingTracker {
        resets: usize,
        registered: Vec<(String, Vec<char>, Vec<char>)>,
    }

    impl KeyTracker for RecordingTracker {
        fn reset(&mut self) {
            self.resets += 1;
            self.registered.clear();
        }

        fn register(&mut self, guess: &str, present_elsewhere: &[char], exact: &[char]) {
            self.registered
                .push((guess.to_string(), present_elsewhere.to_vec(), exact.to_vec()));
        }
    }

    /// Store whose writes always fail
    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn persist(&mut self, _session: &Session) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk full")))
        }

        fn load(&self) -> Result<Option<Session>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk gone")))
        }
    }

    #[test]
    fn new_game_uses_configured_length() {
        let dictionary = WordList::from_slice(WORDS);
        let session = Session::with_options(GameOptions {
            word_length: 6,
            hard_mode: false,
        });
        let mut controller = Controller::new(
            &dictionary,
            Keyboard::new(),
            MemoryStore::new(),
            session,
            instant_settings(),
        )
        .unwrap();

        controller.start_new_game().unwrap();

        assert_eq!(controller.secret().text(), "HUMANS");
        assert_eq!(controller.board().word_length(), 6);
        assert_eq!(controller.store().saved().unwrap().secret, "HUMANS");
        assert!(!controller.session().shared);
    }

    #[test]
    fn missing_length_is_an_error() {
        let dictionary = WordList::from_slice(WORDS);
        let session = Session::with_options(GameOptions {
            word_length: 8,
            hard_mode: false,
        });

        let result = Controller::new(
            &dictionary,
            Keyboard::new(),
            MemoryStore::new(),
            session,
            instant_settings(),
        );
        assert!(matches!(result, Err(GameError::NoWordsOfLength(8))));
    }

    #[test]
    fn typing_filters_and_uppercases() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");

        assert!(controller.submit_character('s'));
        assert!(!controller.submit_character('1'));
        assert!(!controller.submit_character(' '));
        assert!(!controller.submit_character('é'));
        type_word(&mut controller, "LATEX");

        assert_eq!(controller.board().current_guess(), "SLATE");
        assert_eq!(controller.board().column_index(), Some(4));

        assert!(controller.remove_last_character());
        assert_eq!(controller.board().current_guess(), "SLAT");
    }

    #[test]
    fn backspace_on_empty_row_is_ignored() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");

        assert!(!controller.remove_last_character());
        assert_eq!(controller.board().column_index(), None);
    }

    #[test]
    fn rejected_guess_only_sets_error() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");

        let rejection = play(&mut controller, "QWERT").unwrap_err();

        assert_eq!(rejection, GuessRejection::NotInDictionary);
        assert_eq!(controller.board().error(), "Not in word list");
        assert_eq!(controller.board().row_index(), 0);
        assert_eq!(controller.board().current_guess(), "QWERT");
        assert!(controller.session().guesses.is_empty());

        // editing clears the message
        controller.remove_last_character();
        assert_eq!(controller.board().error(), "");
    }

    #[test]
    fn short_guess_is_rejected() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");

        let rejection = play(&mut controller, "SLA").unwrap_err();
        assert_eq!(rejection.to_string(), "Not enough letters");
    }

    #[test]
    fn repeat_guess_does_not_mutate() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");
        play(&mut controller, "SLATE").unwrap();

        let rejection = play(&mut controller, "SLATE").unwrap_err();

        assert_eq!(rejection, GuessRejection::AlreadyGuessed);
        assert_eq!(controller.board().row_index(), 1);
        assert_eq!(controller.session().guesses, vec!["SLATE"]);
    }

    #[test]
    fn accepted_guess_commits_row_and_registers_keys() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");

        let evaluation = play(&mut controller, "slate").unwrap();

        assert_eq!(evaluation.pattern().to_string(), "--G-G");
        assert_eq!(controller.board().row_index(), 1);
        assert_eq!(controller.board().column_index(), None);
        assert_eq!(controller.session().guesses, vec!["SLATE"]);
        assert_eq!(controller.store().saved().unwrap().guesses, vec!["SLATE"]);

        let keys = controller.key_tracker();
        assert_eq!(keys.state('A'), KeyState::Exact);
        assert_eq!(keys.state('S'), KeyState::Absent);
        assert_eq!(keys.state('C'), KeyState::Unused);
    }

    #[test]
    fn key_tracker_receives_clues() {
        let dictionary = WordList::from_slice(&["alloy", "llama"]);
        let mut controller = Controller::new(
            &dictionary,
            RecordingTracker::default(),
            MemoryStore::new(),
            Session::default(),
            instant_settings(),
        )
        .unwrap();
        controller.start_shared_game(Word::new("alloy").unwrap());

        play(&mut controller, "LLAMA").unwrap();

        assert_eq!(
            controller.key_tracker().registered,
            vec![("LLAMA".to_string(), vec!['L', 'A'], vec!['L'])]
        );
    }

    #[test]
    fn solving_wins_once_and_locks_input() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");
        play(&mut controller, "SLATE").unwrap();

        let evaluation = play(&mut controller, "CRANE").unwrap();

        assert!(evaluation.is_solved());
        assert_eq!(controller.board().status(), GameStatus::Won);
        assert!(!controller.submit_character('A'));
        assert!(!controller.submit_guess());
        assert!(controller.flush().is_none());
        assert_eq!(controller.board().row_index(), 2);
    }

    #[test]
    fn six_misses_lose() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");

        for word in ["SLATE", "ALTER", "ATONE", "BLAST", "TRAIN", "SCARE"] {
            assert_eq!(controller.board().status(), GameStatus::Active);
            play(&mut controller, word).unwrap();
        }

        assert_eq!(controller.board().status(), GameStatus::Lost);
        assert_eq!(controller.board().row_index(), MAX_GUESSES);
        assert!(controller.board().current_row().is_none());
    }

    #[test]
    fn concede_pads_guesses_and_loses() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");
        play(&mut controller, "SLATE").unwrap();
        type_word(&mut controller, "ALT");

        controller.concede();

        let session = controller.session();
        assert_eq!(session.guesses.len(), MAX_GUESSES);
        assert_eq!(session.guesses[0], "SLATE");
        assert!(session.guesses[1..].iter().all(|g| g == "     "));
        assert_eq!(controller.board().status(), GameStatus::Lost);
        assert_eq!(controller.board().row_index(), MAX_GUESSES);
        assert!(controller.board().rows()[1].text().is_empty());
        assert_eq!(controller.store().saved().unwrap().guesses.len(), MAX_GUESSES);
    }

    #[test]
    fn concede_after_win_is_ignored() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");
        play(&mut controller, "CRANE").unwrap();

        controller.concede();

        assert_eq!(controller.board().status(), GameStatus::Won);
        assert_eq!(controller.session().guesses.len(), 1);
    }

    #[test]
    fn resume_replays_identically() {
        let dictionary = WordList::from_slice(WORDS);
        let mut live = controller(&dictionary, "train");
        for word in ["SCARE", "BLAND", "GIANT"] {
            play(&mut live, word).unwrap();
        }

        let mut resumed = Controller::new(
            &dictionary,
            Keyboard::new(),
            MemoryStore::new(),
            live.session().clone(),
            instant_settings(),
        )
        .unwrap();
        resumed.initialize().unwrap();

        assert_eq!(resumed.board().rows(), live.board().rows());
        assert_eq!(resumed.board().row_index(), 3);
        assert_eq!(resumed.key_tracker(), live.key_tracker());
        assert_eq!(resumed.board().status(), GameStatus::Active);
    }

    #[test]
    fn resume_finished_game_is_terminal() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");

        controller.resume_session(vec!["SLATE".to_string(), "CRANE".to_string()]);
        assert_eq!(controller.board().status(), GameStatus::Won);

        let mut conceded = vec!["SLATE".to_string()];
        conceded.resize(MAX_GUESSES, "     ".to_string());
        controller.resume_session(conceded);
        assert_eq!(controller.board().status(), GameStatus::Lost);
        assert_eq!(controller.board().row_index(), MAX_GUESSES);
    }

    #[test]
    fn resume_truncates_oversized_history() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");

        controller.resume_session(vec!["SLATE".to_string(); 8]);

        assert_eq!(controller.session().guesses.len(), MAX_GUESSES);
        assert_eq!(controller.board().status(), GameStatus::Lost);
    }

    #[test]
    fn initialize_without_progress_starts_fresh() {
        let dictionary = WordList::from_slice(WORDS);
        let session = Session {
            secret: "CRANE".to_string(),
            elapsed_seconds: 99,
            ..Session::default()
        };
        let mut controller = Controller::new(
            &dictionary,
            Keyboard::new(),
            MemoryStore::new(),
            session,
            instant_settings(),
        )
        .unwrap();

        controller.initialize().unwrap();

        assert_eq!(controller.session().elapsed_seconds, 0);
        assert_eq!(controller.secret().len(), 5);
        assert!(controller.store().saves() > 0);
    }

    #[test]
    fn load_applies_options_to_fresh_session() {
        let dictionary = WordList::from_slice(WORDS);
        let stored = Session {
            secret: "CRANE".to_string(),
            ..Session::default()
        };
        let options = GameOptions {
            word_length: 4,
            hard_mode: true,
        };

        let mut controller = Controller::load(
            &dictionary,
            Keyboard::new(),
            MemoryStore::with_session(stored),
            options,
            instant_settings(),
        )
        .unwrap();
        controller.initialize().unwrap();

        assert_eq!(controller.secret().text(), "TIDE");
        assert_eq!(controller.board().row_index(), 0);
        assert_eq!(controller.session().options, options);
    }

    #[test]
    fn resumed_game_keeps_its_saved_options() {
        let dictionary = WordList::from_slice(WORDS);
        let stored = Session {
            secret: "ALTER".to_string(),
            guesses: vec!["ATONE".to_string()],
            options: GameOptions {
                word_length: 5,
                hard_mode: true,
            },
            ..Session::default()
        };

        let mut controller = Controller::load(
            &dictionary,
            Keyboard::new(),
            MemoryStore::with_session(stored),
            GameOptions::default(),
            instant_settings(),
        )
        .unwrap();
        controller.initialize().unwrap();

        assert_eq!(controller.secret().text(), "ALTER");
        assert_eq!(controller.board().row_index(), 1);
        assert!(controller.session().options.hard_mode);

        let rejection = play(&mut controller, "BLAST").unwrap_err();
        assert_eq!(rejection.to_string(), "First letter must be A");
        assert_eq!(controller.session().guesses.len(), 1);
    }

    #[test]
    fn shared_game_resets_state() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");
        play(&mut controller, "SLATE").unwrap();
        controller.tick();

        controller.start_shared_game(Word::new("humans").unwrap());

        let session = controller.session();
        assert!(session.shared);
        assert!(session.guesses.is_empty());
        assert_eq!(session.elapsed_seconds, 0);
        assert_eq!(session.options.word_length, 6);
        assert_eq!(controller.board().word_length(), 6);
        assert_eq!(controller.board().row_index(), 0);
        assert_eq!(controller.key_tracker().state('S'), KeyState::Unused);
    }

    #[test]
    fn open_valid_share_link() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");
        let token = share::encode(&Word::new("tides").unwrap());

        assert!(controller.open_shared_link(&token).unwrap());
        assert_eq!(controller.secret().text(), "TIDES");
        assert!(controller.session().shared);
        assert_eq!(controller.board().error(), "");
    }

    #[test]
    fn open_invalid_share_link_falls_back() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");
        play(&mut controller, "SLATE").unwrap();

        // "QWERT" is not in the dictionary
        assert!(!controller.open_shared_link("UVdFUlQ=").unwrap());

        // progress existed, so the game was resumed
        assert_eq!(controller.secret().text(), "CRANE");
        assert_eq!(controller.board().row_index(), 1);
        assert_eq!(controller.board().error(), INVALID_SHARE_LINK);

        assert!(!controller.open_shared_link("%%%").unwrap());
        assert_eq!(controller.board().error(), INVALID_SHARE_LINK);
    }

    #[test]
    fn submissions_are_serialized() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = Controller::new(
            &dictionary,
            Keyboard::new(),
            MemoryStore::new(),
            Session::default(),
            ControllerSettings {
                submit_delay: Duration::from_millis(100),
                autosave_seconds: 0,
            },
        )
        .unwrap();
        controller.start_shared_game(Word::new("crane").unwrap());
        type_word(&mut controller, "SLATE");

        let start = Instant::now();
        assert!(controller.request_submit(start));
        assert!(!controller.request_submit(start));
        assert!(!controller.submit_character('X'));
        assert!(!controller.remove_last_character());

        assert!(controller.poll(start + Duration::from_millis(50)).is_none());
        assert_eq!(controller.board().row_index(), 0);

        let outcome = controller.poll(start + Duration::from_millis(100));
        assert!(outcome.unwrap().is_ok());
        assert_eq!(controller.board().row_index(), 1);
        assert!(!controller.is_submit_pending());
        assert!(controller.poll(start + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn clock_runs_only_after_first_guess() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");
        let saves = controller.store().saves();

        assert!(!controller.tick());
        play(&mut controller, "SLATE").unwrap();
        let saves = saves + 1;
        assert_eq!(controller.store().saves(), saves);

        assert!(controller.tick());
        assert!(controller.tick());
        assert_eq!(controller.store().saves(), saves);
        assert!(controller.tick());
        assert_eq!(controller.store().saves(), saves + 1);
        assert_eq!(controller.store().saved().unwrap().elapsed_seconds, 3);

        play(&mut controller, "CRANE").unwrap();
        assert!(!controller.tick());
        assert_eq!(controller.session().elapsed_seconds, 3);
    }

    #[test]
    fn observers_receive_snapshots() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "crane");
        let updates = controller.subscribe();
        let dropped = controller.subscribe();
        drop(dropped);

        controller.submit_character('c');
        let snapshot = updates.try_recv().unwrap();
        assert_eq!(snapshot.current_guess(), "C");

        controller.submit_character('r');
        assert_eq!(snapshot.current_guess(), "C");
        assert_eq!(updates.try_recv().unwrap().current_guess(), "CR");
        assert_eq!(controller.observers.len(), 1);
    }

    #[test]
    fn hard_mode_consults_only_latest_row() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "train");
        play(&mut controller, "SCARE").unwrap();
        play(&mut controller, "BLAND").unwrap();
        controller.set_hard_mode(true);

        // SCARE revealed R, BLAND did not: only BLAND's clues bind GIANT
        let evaluation = play(&mut controller, "GIANT").unwrap();
        assert_eq!(
            evaluation.pattern().marks()[2],
            Mark::Exact,
            "A stays in place"
        );
        assert_eq!(controller.board().row_index(), 3);
    }

    #[test]
    fn hard_mode_rejection_surfaces_message() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = controller(&dictionary, "alter");
        controller.set_hard_mode(true);
        play(&mut controller, "ATONE").unwrap();

        let rejection = play(&mut controller, "BLAST").unwrap_err();

        assert_eq!(rejection.to_string(), "First letter must be A");
        assert_eq!(controller.board().error(), "First letter must be A");
        assert_eq!(controller.session().guesses.len(), 1);
    }

    #[test]
    fn store_failures_are_not_surfaced() {
        let dictionary = WordList::from_slice(WORDS);
        let mut controller = Controller::load(
            &dictionary,
            Keyboard::new(),
            BrokenStore,
            GameOptions::default(),
            instant_settings(),
        )
        .unwrap();
        controller.start_shared_game(Word::new("crane").unwrap());

        assert!(play(&mut controller, "CRANE").unwrap().is_solved());
        assert_eq!(controller.board().status(), GameStatus::Won);
    }
}
