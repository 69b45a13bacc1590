//! Trainer error types

use chess_core::ChessError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrainerError {
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Puzzle API returned status code {0}")]
    HttpStatus(u16),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Failed to parse PGN: {0}")]
    NotationParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before the puzzle was completed")]
    InputClosed,

    #[error("Puzzle {0} is already completed")]
    AlreadyCompleted(String),
}

impl From<ChessError> for TrainerError {
    fn from(e: ChessError) -> Self {
        if e.is_pgn() {
            TrainerError::NotationParse(e.to_string())
        } else {
            TrainerError::Decode(e.to_string())
        }
    }
}

impl From<serde_json::Error> for TrainerError {
    fn from(e: serde_json::Error) -> Self {
        TrainerError::Decode(format!("invalid puzzle JSON: {e}"))
    }
}
