// src/commands/rm/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.wants_help() {
            return CommandResult::success(
                "Usage: rm PATH\n\n\
                 Empty the directory at PATH, or remove file PATH from the\n\
                 current directory.\n".to_string()
            );
        }

        let Some(path) = ctx.args.first() else {
            return CommandResult::invalid();
        };

        match ctx.fs.rm(path) {
            Ok(_) => CommandResult::ok(),
            Err(_) => CommandResult::error("File or directory not found\n".to_string()),
        }
    }
}
