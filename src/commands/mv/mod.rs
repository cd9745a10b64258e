// src/commands/mv/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct MvCommand;

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.wants_help() {
            return CommandResult::success(
                "Usage: mv SOURCE DEST\n\n\
                 Copy the contents of SOURCE into DEST, then remove SOURCE.\n\
                 SOURCE is removed even if the copy fails.\n\
                 A removed directory is emptied, not deleted.\n".to_string()
            );
        }

        let [src, dest, ..] = ctx.args else {
            return CommandResult::invalid();
        };

        let moved = ctx.fs.mv(src, dest);
        if moved.is_ok() {
            return CommandResult::ok();
        }

        let mut stderr = String::new();
        if moved.copied.is_err() {
            stderr.push_str("Invalid source or destination path\n");
        }
        if moved.removed.is_err() {
            stderr.push_str("File or directory not found\n");
        }
        CommandResult::error(stderr)
    }
}
