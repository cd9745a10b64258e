// src/commands/mkdir/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.wants_help() {
            return CommandResult::success(
                "Usage: mkdir NAME\n\n\
                 Create directory NAME inside the current directory.\n".to_string()
            );
        }

        let Some(name) = ctx.args.first() else {
            return CommandResult::invalid();
        };

        ctx.fs.mkdir(name);
        CommandResult::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::InMemoryFs;

    fn run(fs: &mut InMemoryFs, args: &[&str]) -> CommandResult {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        MkdirCommand.execute(CommandContext::new(&args, fs))
    }

    #[test]
    fn test_mkdir_simple() {
        let mut fs = InMemoryFs::new();
        let result = run(&mut fs, &["newdir"]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(fs.ls("").unwrap().directories, vec!["newdir"]);
    }

    #[test]
    fn test_mkdir_allows_duplicates() {
        let mut fs = InMemoryFs::new();
        run(&mut fs, &["a"]);
        run(&mut fs, &["a"]);
        assert_eq!(fs.ls("").unwrap().directories, vec!["a", "a"]);
    }

    #[test]
    fn test_mkdir_missing_operand() {
        let mut fs = InMemoryFs::new();
        let result = run(&mut fs, &[]);
        assert_eq!(result, CommandResult::invalid());
        assert!(fs.is_empty());
    }
}
