//! On-screen keyboard state
//!
//! Tracks the best-known classification of every letter across all accepted
//! guesses. A key only ever moves up: Unused, Absent, Present, Exact.

use super::KeyTracker;

/// QWERTY layout used when drawing the keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// What is known about a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum KeyState {
    #[default]
    Unused,
    Absent,
    Present,
    Exact,
}

/// Per-letter knowledge for A-Z
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keyboard {
    keys: [KeyState; 26],
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State of `letter`, `Unused` for anything outside A-Z
    #[must_use]
    pub fn state(&self, letter: char) -> KeyState {
        Self::index(letter).map_or(KeyState::Unused, |i| self.keys[i])
    }

    fn upgrade(&mut self, letter: char, state: KeyState) {
        if let Some(i) = Self::index(letter) {
            self.keys[i] = self.keys[i].max(state);
        }
    }

    fn index(letter: char) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| usize::from(upper as u8 - b'A'))
    }
}

impl KeyTracker for Keyboard {
    fn reset(&mut self) {
        self.keys = [KeyState::Unused; 26];
    }

    fn register(&mut self, guess: &str, present_elsewhere: &[char], exact: &[char]) {
        for letter in guess.chars() {
            self.upgrade(letter, KeyState::Absent);
        }
        for &letter in present_elsewhere {
            self.upgrade(letter, KeyState::Present);
        }
        for &letter in exact {
            self.upgrade(letter, KeyState::Exact);
        }
    }
}
