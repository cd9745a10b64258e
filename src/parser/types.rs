//! Parser Types

use thiserror::Error;

/// Errors produced while splitting a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("echo: expected '>' before the file name")]
    MissingRedirect,

    #[error("echo: missing file name after '>'")]
    MissingTarget,
}
