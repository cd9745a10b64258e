//! Shell Session
//!
//! Main entry point for the interactive file system shell.
//! Ties together the line parser, the command registry and the file system.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::commands::{create_registry, CommandContext, CommandRegistry, CommandResult};
use crate::fs::InMemoryFs;
use crate::parser::parse_line;

/// Options for creating a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Print `<path>> ` before reading each line.
    pub prompt: bool,
    /// Starting tree (defaults to an empty root).
    pub fs: Option<InMemoryFs>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { prompt: true, fs: None }
    }
}

/// What happened after executing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecOutcome {
    Continue(CommandResult),
    Exit(CommandResult),
}

impl ExecOutcome {
    pub fn result(&self) -> &CommandResult {
        match self {
            ExecOutcome::Continue(result) | ExecOutcome::Exit(result) => result,
        }
    }
}

/// One shell session over one file system.
pub struct Session {
    fs: InMemoryFs,
    registry: CommandRegistry,
    prompt: bool,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            fs: options.fs.unwrap_or_default(),
            registry: create_registry(),
            prompt: options.prompt,
        }
    }

    pub fn fs(&self) -> &InMemoryFs {
        &self.fs
    }

    /// Prompt shown before each line, e.g. `/home> `.
    pub fn prompt(&self) -> String {
        format!("{}> ", self.fs.current_path())
    }

    /// Execute a single input line.
    pub fn exec(&mut self, line: &str) -> ExecOutcome {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return ExecOutcome::Continue(CommandResult::ok()),
            Err(e) => {
                debug!(line, error = %e, "rejected line");
                return ExecOutcome::Continue(CommandResult::invalid());
            }
        };

        if command.name == "exit" {
            return ExecOutcome::Exit(CommandResult::success("Exiting the file system\n".to_string()));
        }

        let Some(handler) = self.registry.get(&command.name) else {
            debug!(name = %command.name, "unknown command");
            return ExecOutcome::Continue(CommandResult::invalid());
        };

        let result = handler.execute(CommandContext::new(&command.args, &mut self.fs));
        debug!(name = %command.name, exit_code = result.exit_code, cwd = %self.fs.current_path(), "executed");
        ExecOutcome::Continue(result)
    }

    /// Read lines from `input` until `exit` or end of input.
    ///
    /// Command output goes to `out`, error messages to `err`. Returns the
    /// process exit status.
    pub async fn run<R, W, E>(&mut self, input: R, out: &mut W, err: &mut E) -> std::io::Result<i32>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        info!(prompt = self.prompt, "session started");
        let mut lines = input.lines();

        loop {
            if self.prompt {
                out.write_all(self.prompt().as_bytes()).await?;
                out.flush().await?;
            }

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let outcome = self.exec(&line);
            let result = outcome.result();
            out.write_all(result.stdout.as_bytes()).await?;
            err.write_all(result.stderr.as_bytes()).await?;
            out.flush().await?;
            err.flush().await?;

            if let ExecOutcome::Exit(_) = outcome {
                info!("exit requested");
                return Ok(0);
            }
        }

        info!("end of input");
        Ok(0)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> Session {
        Session::new(SessionOptions { prompt: false, ..Default::default() })
    }

    async fn run_script(session: &mut Session, script: &str) -> (String, String, i32) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = session.run(script.as_bytes(), &mut out, &mut err).await.unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap(), code)
    }

    #[test]
    fn test_exec_docs_scenario() {
        let mut session = quiet();
        for line in ["mkdir docs", "cd docs", "touch readme", r#"echo "hello" > readme"#] {
            assert_eq!(session.exec(line).result().exit_code, 0, "{line}");
        }
        let outcome = session.exec("cat readme");
        assert_eq!(outcome, ExecOutcome::Continue(CommandResult::success("hello\n".to_string())));
        assert_eq!(session.prompt(), "/docs> ");
    }

    #[test]
    fn test_exec_invalid_command() {
        let mut session = quiet();
        assert_eq!(session.exec("frobnicate x"), ExecOutcome::Continue(CommandResult::invalid()));
        assert_eq!(session.exec("mkdir"), ExecOutcome::Continue(CommandResult::invalid()));
        assert_eq!(session.exec("echo no redirect"), ExecOutcome::Continue(CommandResult::invalid()));
        assert!(session.fs().is_empty());
    }

    #[test]
    fn test_exec_exit() {
        let mut session = quiet();
        match session.exec("exit") {
            ExecOutcome::Exit(result) => assert_eq!(result.stdout, "Exiting the file system\n"),
            other => panic!("expected exit, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_line_is_noop() {
        let mut session = quiet();
        assert_eq!(session.exec("   "), ExecOutcome::Continue(CommandResult::ok()));
    }

    #[tokio::test]
    async fn test_run_with_prompts() {
        let mut session = Session::default();
        let (out, err, code) = run_script(&mut session, "mkdir home\ncd home\nls\nexit\nmkdir never\n").await;
        assert_eq!(code, 0);
        assert_eq!(
            out,
            "/> /> /home> Contents of home:\n/home> Exiting the file system\n"
        );
        assert!(err.is_empty());
        assert_eq!(session.fs().ls("/").unwrap().directories, vec!["home"]);
    }

    #[tokio::test]
    async fn test_run_reports_errors_and_continues() {
        let mut session = quiet();
        let (out, err, code) = run_script(&mut session, "cat ghost\nbogus\ntouch f\nls\n").await;
        assert_eq!(code, 0);
        assert_eq!(err, "File not found\nInvalid command\n");
        assert_eq!(out, "Contents of /:\nf\n");
    }

    #[tokio::test]
    async fn test_run_mv_scenario() {
        let mut session = quiet();
        let script = "mkdir a\nmkdir b\ncd a\ntouch f\necho \"x\" > f\ncd ..\nmv a b\nls a\ncd b\ncat f\n";
        let (out, err, _) = run_script(&mut session, script).await;
        assert!(err.is_empty(), "{err}");
        assert_eq!(out, "Contents of a:\nx\n");
    }

    #[tokio::test]
    async fn test_run_mv_file_removes_it() {
        let mut session = quiet();
        let (out, err, _) = run_script(&mut session, "mkdir docs\ntouch readme\nmv readme docs\nls\n").await;
        assert_eq!(err, "Invalid source or destination path\n");
        assert_eq!(out, "Contents of /:\ndocs/\n");
    }

    #[test]
    fn test_session_with_initial_tree() {
        let mut fs = InMemoryFs::new();
        fs.mkdir("srv");
        let session = Session::new(SessionOptions { prompt: true, fs: Some(fs) });
        assert_eq!(session.fs().ls("").unwrap().directories, vec!["srv"]);
    }
}
