// src/commands/echo/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

/// `echo "<content>" > <name>`; the line parser delivers `[content, name]`.
pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let [content, name, ..] = ctx.args else {
            return CommandResult::invalid();
        };

        match ctx.fs.echo(name, content) {
            Ok(()) => CommandResult::ok(),
            Err(_) => CommandResult::error("File not found\n".to_string()),
        }
    }
}
