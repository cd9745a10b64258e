// src/commands/cd/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.wants_help() {
            return CommandResult::success(
                "Usage: cd PATH\n\n\
                 Change the current directory. PATH may be absolute, relative,\n\
                 '/' or '..'. A path that only partly exists moves as far as it can.\n".to_string()
            );
        }

        let Some(path) = ctx.args.first() else {
            return CommandResult::invalid();
        };

        // Partial and unresolved paths are not errors here.
        ctx.fs.cd(path);
        CommandResult::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::InMemoryFs;

    fn run(fs: &mut InMemoryFs, args: &[&str]) -> CommandResult {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        CdCommand.execute(CommandContext::new(&args, fs))
    }

    #[test]
    fn test_cd_into_and_out() {
        let mut fs = InMemoryFs::new();
        fs.mkdir("home");
        assert_eq!(run(&mut fs, &["home"]).exit_code, 0);
        assert_eq!(fs.current_path(), "/home");
        run(&mut fs, &[".."]);
        assert_eq!(fs.current_path(), "/");
    }

    #[test]
    fn test_cd_dot_dot_at_root() {
        let mut fs = InMemoryFs::new();
        let result = run(&mut fs, &[".."]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(fs.current(), fs.root());
    }

    #[test]
    fn test_cd_missing_path_is_silent() {
        let mut fs = InMemoryFs::new();
        let result = run(&mut fs, &["nowhere"]);
        assert_eq!(result, CommandResult::ok());
        assert_eq!(fs.current_path(), "/");
    }

    #[test]
    fn test_cd_missing_operand() {
        let mut fs = InMemoryFs::new();
        assert_eq!(run(&mut fs, &[]), CommandResult::invalid());
    }
}
