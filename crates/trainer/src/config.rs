//! Runtime configuration from CLI flags and environment variables

use std::env;
use std::io::{self, IsTerminal};
use std::time::Duration;

use crate::cli::Cli;

pub const DEFAULT_API_BASE: &str = "https://lichess.org";
pub const USER_AGENT: &str = concat!("chess-trainer/", env!("CARGO_PKG_VERSION"));

/// Which puzzle to fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleMode {
    Daily,
    Random,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mode: PuzzleMode,

    /// Base URL of the Lichess API (overridable for mirrors and local testing)
    pub api_base: String,

    /// Request timeout; `None` waits indefinitely
    pub http_timeout: Option<Duration>,

    /// Colour pieces with ANSI escapes
    pub color: bool,

    /// Redraw the board after each intermediate opponent reply
    pub board_after_reply: bool,
}

impl Config {
    /// Combine parsed flags with `LICHESS_API_URL`, `PUZZLE_HTTP_TIMEOUT_SECS`
    /// and `NO_COLOR` from the environment. Colour is also off when stdout is
    /// not a terminal.
    pub fn load(cli: &Cli) -> Self {
        let api_base = env::var("LICHESS_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let http_timeout = env::var("PUZZLE_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs: &u64| *secs > 0)
            .map(Duration::from_secs);

        let settings = EnvSettings {
            api_base,
            http_timeout,
            no_color: env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
            stdout_is_terminal: io::stdout().is_terminal(),
        };

        Self::from_parts(cli, settings)
    }

    fn from_parts(cli: &Cli, settings: EnvSettings) -> Self {
        Self {
            mode: mode_from_flags(cli.daily_puzzle, cli.random_puzzle),
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            http_timeout: settings.http_timeout,
            color: settings.stdout_is_terminal && !(cli.no_color || settings.no_color),
            board_after_reply: cli.board_after_reply,
        }
    }

    pub fn daily_puzzle_url(&self) -> String {
        format!("{}/api/puzzle/daily", self.api_base)
    }
}

/// Settings read from the process environment.
struct EnvSettings {
    api_base: String,
    http_timeout: Option<Duration>,
    no_color: bool,
    stdout_is_terminal: bool,
}

/// The daily path runs unless only the random flag is given.
pub fn mode_from_flags(daily: bool, random: bool) -> PuzzleMode {
    if random && !daily {
        PuzzleMode::Random
    } else {
        PuzzleMode::Daily
    }
}
