// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.wants_help() {
            return CommandResult::success(
                "Usage: ls [PATH]\n\n\
                 List subdirectories (marked with '/') and then files of PATH,\n\
                 or of the current directory when PATH is omitted.\n".to_string()
            );
        }

        let path = ctx.args.first().map(String::as_str).unwrap_or("");
        match ctx.fs.ls(path) {
            Ok(listing) => CommandResult::success(listing.to_string()),
            Err(_) => CommandResult::error("Directory not found\n".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::InMemoryFs;

    fn run(fs: &mut InMemoryFs, args: &[&str]) -> CommandResult {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        LsCommand.execute(CommandContext::new(&args, fs))
    }

    #[test]
    fn test_ls_current_directory() {
        let mut fs = InMemoryFs::new();
        fs.touch("b.txt");
        fs.mkdir("zdir");
        fs.touch("a.txt");
        let result = run(&mut fs, &[]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "Contents of /:\nzdir/\nb.txt\na.txt\n");
    }

    #[test]
    fn test_ls_path() {
        let mut fs = InMemoryFs::new();
        fs.mkdir("docs");
        fs.cd("docs");
        fs.touch("readme");
        fs.cd("/");
        let result = run(&mut fs, &["docs"]);
        assert_eq!(result.stdout, "Contents of docs:\nreadme\n");
    }

    #[test]
    fn test_ls_not_found() {
        let mut fs = InMemoryFs::new();
        let result = run(&mut fs, &["missing"]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, "Directory not found\n");
    }
}
