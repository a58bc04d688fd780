//! Word lists for the puzzle
//!
//! Provides the embedded dictionary compiled into the binary, file loading for
//! custom lists, and the `WordList` dictionary built from either.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::WordList;
pub use embedded::{WORDS, WORDS_COUNT};
