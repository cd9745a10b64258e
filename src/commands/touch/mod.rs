// src/commands/touch/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.wants_help() {
            return CommandResult::success(
                "Usage: touch NAME\n\n\
                 Create an empty file NAME in the current directory.\n".to_string()
            );
        }

        let Some(name) = ctx.args.first() else {
            return CommandResult::invalid();
        };

        ctx.fs.touch(name);
        CommandResult::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::InMemoryFs;

    fn run(fs: &mut InMemoryFs, args: &[&str]) -> CommandResult {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        TouchCommand.execute(CommandContext::new(&args, fs))
    }

    #[test]
    fn test_touch_creates_empty_file() {
        let mut fs = InMemoryFs::new();
        assert_eq!(run(&mut fs, &["notes"]).exit_code, 0);
        assert_eq!(fs.cat("notes").unwrap(), "");
    }

    #[test]
    fn test_touch_order() {
        let mut fs = InMemoryFs::new();
        for name in ["c", "a", "b"] {
            run(&mut fs, &[name]);
        }
        assert_eq!(fs.ls("").unwrap().files, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_touch_missing_operand() {
        let mut fs = InMemoryFs::new();
        assert_eq!(run(&mut fs, &[]), CommandResult::invalid());
    }
}
