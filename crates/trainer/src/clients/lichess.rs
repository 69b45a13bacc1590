use chess_core::GameRecord;
use reqwest::Client;

use crate::config::{Config, PuzzleMode, USER_AGENT};
use crate::error::TrainerError;
use crate::puzzle::{decode_payload, Puzzle};

/// Result of a fetch: a playable puzzle, or a notice that the mode has no source yet.
#[derive(Debug)]
pub enum FetchOutcome {
    Puzzle(Puzzle, GameRecord),
    Unavailable(&'static str),
}

pub struct LichessClient {
    client: Client,
    daily_url: String,
}

impl LichessClient {
    pub fn new(config: &Config) -> Result<Self, TrainerError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            daily_url: config.daily_puzzle_url(),
        })
    }

    /// Fetch a puzzle for `mode`.
    /// Random puzzles are not served yet and make no request.
    pub async fn fetch(&self, mode: PuzzleMode) -> Result<FetchOutcome, TrainerError> {
        match mode {
            PuzzleMode::Daily => {
                let (puzzle, record) = self.fetch_daily().await?;
                Ok(FetchOutcome::Puzzle(puzzle, record))
            }
            PuzzleMode::Random => Ok(FetchOutcome::Unavailable(
                "Random puzzles are not yet available.",
            )),
        }
    }

    /// Fetch the puzzle of the day.
    pub async fn fetch_daily(&self) -> Result<(Puzzle, GameRecord), TrainerError> {
        tracing::info!(url = %self.daily_url, "Fetching daily puzzle");

        let resp = self
            .client
            .get(&self.daily_url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(TrainerError::HttpStatus(resp.status().as_u16()));
        }

        let text = resp.text().await?;
        let (puzzle, record) = decode_payload(&text)?;

        tracing::info!(
            puzzle_id = %puzzle.id,
            game_id = %record.id,
            white = ?record.metadata.white,
            black = ?record.metadata.black,
            rating = ?puzzle.rating,
            themes = ?puzzle.themes,
            "Puzzle loaded"
        );

        Ok((puzzle, record))
    }
}
