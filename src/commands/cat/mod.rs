// src/commands/cat/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.wants_help() {
            return CommandResult::success(
                "Usage: cat NAME\n\n\
                 Print the content of file NAME from the current directory.\n".to_string()
            );
        }

        let Some(name) = ctx.args.first() else {
            return CommandResult::invalid();
        };

        match ctx.fs.cat(name) {
            Ok(content) => CommandResult::success(format!("{}\n", content)),
            Err(_) => CommandResult::error("File not found\n".to_string()),
        }
    }
}
