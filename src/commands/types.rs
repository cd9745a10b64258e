// src/commands/types.rs
use crate::fs::InMemoryFs;

/// Message printed for unknown verbs and wrong argument counts.
pub const INVALID_COMMAND: &str = "Invalid command";

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0 }
    }

    pub fn ok() -> Self {
        Self::success(String::new())
    }

    pub fn error(stderr: String) -> Self {
        Self { stdout: String::new(), stderr, exit_code: 1 }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code }
    }

    /// Unknown verb or malformed arguments; exit code 2 like a usage error.
    pub fn invalid() -> Self {
        Self::with_exit_code(String::new(), format!("{}\n", INVALID_COMMAND), 2)
    }
}

/// Execution context handed to a command.
pub struct CommandContext<'a> {
    pub args: &'a [String],
    pub fs: &'a mut InMemoryFs,
}

impl<'a> CommandContext<'a> {
    pub fn new(args: &'a [String], fs: &'a mut InMemoryFs) -> Self {
        Self { args, fs }
    }

    /// Whether `--help` appears among the arguments.
    pub fn wants_help(&self) -> bool {
        self.args.iter().any(|a| a == "--help")
    }
}

/// A shell verb operating on the file system.
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}
