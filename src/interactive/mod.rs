//! Interactive terminal UI
//!
//! A ratatui front end over the game `Controller`.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
