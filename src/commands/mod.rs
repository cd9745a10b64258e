// src/commands/mod.rs
pub mod cat;
pub mod cd;
pub mod cp;
pub mod echo;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod touch;
pub mod types;

pub use registry::{create_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult, INVALID_COMMAND};
