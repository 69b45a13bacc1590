//! Rules adapter error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChessError {
    #[error("PGN error: {0}")]
    Pgn(String),

    #[error("Invalid coordinate move '{0}'")]
    InvalidCoordinate(String),

    #[error("Move '{notation}' is not legal in position {position}")]
    IllegalMove { notation: String, position: String },
}

impl ChessError {
    /// True when the failure came from the game record rather than a single move.
    pub fn is_pgn(&self) -> bool {
        matches!(self, ChessError::Pgn(_))
    }
}
