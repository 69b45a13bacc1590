use std::ffi::OsString;

use clap::Parser;

/// Long options that may also be spelled with a single dash (`-dp`, `-dailyPuzzle`).
const SINGLE_DASH_LONGS: &[&str] = &[
    "dailyPuzzle",
    "dp",
    "randomPuzzle",
    "rp",
    "no-color",
    "board-after-reply",
];

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "Solve Lichess puzzles in the terminal", long_about = None)]
pub struct Cli {
    /// Play the Lichess puzzle of the day (the default)
    #[arg(long = "dailyPuzzle", alias = "dp")]
    pub daily_puzzle: bool,

    /// Play a random puzzle (not yet available)
    #[arg(long = "randomPuzzle", alias = "rp")]
    pub random_puzzle: bool,

    /// Print the board without ANSI colours
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Redraw the board after every scripted opponent reply
    #[arg(long = "board-after-reply")]
    pub board_after_reply: bool,
}

impl Cli {
    /// Parse from the process arguments, accepting single-dash long options.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite `-dp` style arguments to `--dp` so clap sees ordinary long options.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(s) if is_single_dash_long(s) => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => SINGLE_DASH_LONGS.contains(&rest),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let args = std::iter::once("chess-trainer")
            .chain(args.iter().copied())
            .map(OsString::from);
        Cli::try_parse_from(normalize_args(args)).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert!(!cli.daily_puzzle);
        assert!(!cli.random_puzzle);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_short_spellings() {
        assert!(parse(&["-dp"]).daily_puzzle);
        assert!(parse(&["-rp"]).random_puzzle);
        assert!(parse(&["--dp"]).daily_puzzle);
        assert!(parse(&["-randomPuzzle"]).random_puzzle);
    }

    #[test]
    fn test_long_spellings() {
        let cli = parse(&["--dailyPuzzle", "--no-color", "--board-after-reply"]);
        assert!(cli.daily_puzzle);
        assert!(cli.no_color);
        assert!(cli.board_after_reply);
    }

    #[test]
    fn test_unknown_single_dash_left_alone() {
        let args = normalize_args(["chess-trainer", "-x", "--dp"].map(OsString::from));
        assert_eq!(args[1], OsString::from("-x"));
        assert_eq!(args[2], OsString::from("--dp"));
    }
}
