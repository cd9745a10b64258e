//! Parser module for shell input lines
//!
//! Turns one line typed at the prompt into a verb and its arguments.

pub mod types;
pub mod command_line;

// Re-exports
pub use types::ParseError;
pub use command_line::{parse_line, CommandLine};
