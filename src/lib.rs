//! Wordle Engine
//!
//! Guess evaluation and game state for a Wordle-style word game: scoring with
//! correct repeated-letter handling, the submission gate with hard mode, and a
//! controller that owns the board and drives new, resumed, conceded and shared
//! games.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Word, evaluate};
//!
//! let secret = Word::new("alloy").unwrap();
//! let evaluation = evaluate(&secret, "LLAMA");
//!
//! assert_eq!(evaluation.pattern().to_string(), "YGY--");
//!
//! let emoji: String = evaluation.pattern().marks().iter().map(|m| m.emoji()).collect();
//! assert_eq!(emoji, "🟨🟩🟨⬜⬜");
//! ```

// Core rules: words, scoring, board, hard mode, status
pub mod core;

// Controller and its collaborators
pub mod game;

// Word lists
pub mod wordlists;

// Error types
pub mod error;

// Share tokens
pub mod share;

// Session stores
pub mod storage;

// Configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
