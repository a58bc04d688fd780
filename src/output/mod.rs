//! Terminal output formatting
//!
//! Share text, clock formatting and the colored display used by the
//! line-oriented commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_results};
pub use formatters::{format_clock, results_message, results_summary, row_emoji};
