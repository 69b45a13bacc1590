//! Terminal chess puzzle trainer
//!
//! Fetches the Lichess puzzle of the day and lets you solve it move by move.

use std::io;

use anyhow::Context;
use chess_trainer::cli::Cli;
use chess_trainer::clients::lichess::{FetchOutcome, LichessClient};
use chess_trainer::config::Config;
use chess_trainer::session::{PuzzleSession, SessionOptions};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse_args();
    let config = Config::load(&cli);

    if let Err(e) = run(&config).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> anyhow::Result<()> {
    // Off for --no-color, NO_COLOR and piped stdout alike
    if !config.color {
        colored::control::set_override(false);
    }

    let client = LichessClient::new(config).context("Failed to build HTTP client")?;

    let (puzzle, record) = match client.fetch(config.mode).await? {
        FetchOutcome::Puzzle(puzzle, record) => (puzzle, record),
        FetchOutcome::Unavailable(notice) => {
            println!("{notice}");
            return Ok(());
        }
    };

    let options = SessionOptions {
        colorize: config.color,
        board_after_reply: config.board_after_reply,
    };
    let mut session = PuzzleSession::new(&puzzle, record, options);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session
        .run(stdin.lock(), stdout.lock())
        .with_context(|| format!("Puzzle {} aborted", puzzle.id))?;

    Ok(())
}
