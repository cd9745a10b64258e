//! memfs - An in-memory file system shell
//!
//! This library provides a tree of directories and files held entirely in
//! memory, shell-like commands over it, and an interactive session loop.

pub mod commands;
pub mod fs;
pub mod logging;
pub mod parser;
pub mod session;

pub use fs::{Directory, File, FsError, InMemoryFs};
pub use session::{ExecOutcome, Session, SessionOptions};
