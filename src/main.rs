use clap::Parser;
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::debug;

use memfs::logging::{setup_tracing, LogLevel};
use memfs::session::{Session, SessionOptions};

#[derive(Parser, Debug)]
#[command(name = "memfs")]
#[command(about = "An in-memory file system shell")]
#[command(version)]
struct Cli {
    /// Execute the commands from command line argument, one per line
    #[arg(short = 'c')]
    script: Option<String>,

    /// Do not print a prompt before each line
    #[arg(long = "no-prompt")]
    no_prompt: bool,

    /// Print the final tree as JSON when the session ends
    #[arg(long = "json")]
    json: bool,

    /// Diagnostic verbosity (logs go to stderr)
    #[arg(long, short, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Script file to execute
    #[arg()]
    script_file: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.log_level);
    debug!("Parsed CLI arguments: {cli:?}");

    // Script source: -c, file, or interactive stdin
    let script = if let Some(s) = cli.script.clone() {
        Some(s)
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read_to_string(file) {
            Ok(content) => Some(content),
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", file, e);
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    let mut session = Session::new(SessionOptions {
        prompt: script.is_none() && !cli.no_prompt,
        ..Default::default()
    });

    let mut stdout = tokio::io::stdout();
    let mut stderr = tokio::io::stderr();
    let status = match script {
        Some(script) => session.run(script.as_bytes(), &mut stdout, &mut stderr).await,
        None => {
            let stdin = BufReader::new(tokio::io::stdin());
            session.run(stdin, &mut stdout, &mut stderr).await
        }
    };

    let code = match status {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&session.fs().snapshot()) {
            Ok(json) => {
                let _ = stdout.write_all(format!("{}\n", json).as_bytes()).await;
                let _ = stdout.flush().await;
            }
            Err(e) => {
                eprintln!("Error: Cannot serialize tree: {}", e);
                std::process::exit(1);
            }
        }
    }

    std::process::exit(code);
}
