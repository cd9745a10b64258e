// src/commands/pwd/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success(format!("{}\n", ctx.fs.current_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::InMemoryFs;

    #[test]
    fn test_pwd() {
        let mut fs = InMemoryFs::new();
        fs.mkdir("a");
        fs.cd("a");
        fs.mkdir("b");
        fs.cd("b");
        let result = PwdCommand.execute(CommandContext::new(&[], &mut fs));
        assert_eq!(result.stdout, "/a/b\n");
    }
}
