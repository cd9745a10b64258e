// src/commands/cp/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CpCommand;

impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.wants_help() {
            return CommandResult::success(
                "Usage: cp SOURCE DEST\n\n\
                 Copy the files and subdirectories of directory SOURCE into\n\
                 directory DEST. Subdirectories are copied recursively.\n".to_string()
            );
        }

        let [src, dest, ..] = ctx.args else {
            return CommandResult::invalid();
        };

        match ctx.fs.cp(src, dest) {
            Ok(()) => CommandResult::ok(),
            Err(_) => CommandResult::error("Invalid source or destination path\n".to_string()),
        }
    }
}
