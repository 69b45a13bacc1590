use shakmaty::{Chess, Position};

use crate::error::ChessError;
use crate::pgn;

/// Header fields picked out of a PGN, all optional since Lichess puzzle
/// games usually ship bare movetext.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameMetadata {
    pub event: Option<String>,
    pub site: Option<String>,
    pub white: Option<String>,
    pub black: Option<String>,
    pub result: Option<String>, // "1-0", "0-1", "1/2-1/2", "*"
}

/// A game replayed up to the puzzle's starting point.
///
/// Immutable once built; callers clone [`GameRecord::position`] to get a
/// position they can play moves on.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub id: String,
    pub pgn: String,
    pub metadata: GameMetadata,
    position: Chess,
    plies: usize,
}

impl GameRecord {
    /// Replay `pgn` from the standard start (or its `[FEN]` tag) into a record.
    pub fn from_pgn(id: impl Into<String>, pgn: &str) -> Result<Self, ChessError> {
        let replayed = pgn::replay(pgn)?;
        Ok(Self {
            id: id.into(),
            pgn: pgn.to_string(),
            metadata: replayed.metadata,
            position: replayed.position,
            plies: replayed.plies,
        })
    }

    /// Build a record around an already known position.
    pub fn from_position(id: impl Into<String>, position: Chess) -> Self {
        Self {
            id: id.into(),
            pgn: String::new(),
            metadata: GameMetadata::default(),
            position,
            plies: 0,
        }
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Number of half-moves replayed from the PGN movetext.
    pub fn plies(&self) -> usize {
        self.plies
    }
}
