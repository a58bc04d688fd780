//! Game layer
//!
//! The `Controller` drives one game over the pure `core` rules, talking to the
//! outside world only through the `Dictionary`, `KeyTracker` and
//! `SessionStore` traits.

mod controller;
mod keyboard;
mod ports;
mod session;
mod validator;

pub use controller::{Controller, ControllerSettings, INVALID_SHARE_LINK};
pub use keyboard::{KEYBOARD_ROWS, KeyState, Keyboard};
pub use ports::{Dictionary, KeyTracker, SessionStore};
pub use session::{GameOptions, Session};
pub use validator::{GuessContext, GuessRejection, validate_guess};
