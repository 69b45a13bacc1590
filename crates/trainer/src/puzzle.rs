//! Puzzle data model and the Lichess puzzle payload it is decoded from.

use chess_core::{notation, GameRecord};
use serde::Deserialize;

use crate::error::TrainerError;

/// A puzzle as served by Lichess. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub id: String,
    /// Coordinate moves, alternating solver / opponent, ending on a solver move.
    pub solution: Vec<String>,
    pub themes: Vec<String>,
    pub rating: Option<u32>,
    pub plays: Option<u32>,
    pub initial_ply: Option<u32>,
}

impl Puzzle {
    /// Number of moves the solver has to find.
    pub fn solver_moves(&self) -> usize {
        self.solution.len().div_ceil(2)
    }
}

#[derive(Debug, Deserialize)]
pub struct LichessPayload {
    pub game: LichessGame,
    pub puzzle: LichessPuzzle,
}

#[derive(Debug, Deserialize)]
pub struct LichessGame {
    #[serde(default)]
    pub id: String,
    pub pgn: String,
    #[serde(default)]
    pub players: Vec<LichessPlayer>,
}

#[derive(Debug, Deserialize)]
pub struct LichessPlayer {
    pub color: String,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LichessPuzzle {
    #[serde(default)]
    pub id: String,
    pub solution: Vec<String>,
    #[serde(default)]
    pub themes: Vec<String>,
    pub rating: Option<u32>,
    pub plays: Option<u32>,
    pub initial_ply: Option<u32>,
}

/// Decode a response body into the puzzle and the game it starts from.
pub fn decode_payload(body: &str) -> Result<(Puzzle, GameRecord), TrainerError> {
    let payload: LichessPayload = serde_json::from_str(body)?;
    let LichessPayload { game, puzzle } = payload;

    if game.pgn.trim().is_empty() {
        return Err(TrainerError::Decode("game.pgn is empty".to_string()));
    }

    let puzzle = Puzzle {
        id: puzzle.id,
        solution: puzzle.solution.into_iter().map(|m| m.trim().to_lowercase()).collect(),
        themes: puzzle.themes,
        rating: puzzle.rating,
        plays: puzzle.plays,
        initial_ply: puzzle.initial_ply,
    };
    validate_solution(&puzzle.solution)?;

    let mut record = GameRecord::from_pgn(game.id, &game.pgn)?;
    // Daily movetext carries no tags; names come from the player list
    for player in game.players {
        let Some(name) = player.name else { continue };
        let slot = match player.color.as_str() {
            "white" => &mut record.metadata.white,
            "black" => &mut record.metadata.black,
            _ => continue,
        };
        slot.get_or_insert(name);
    }

    if let Some(initial_ply) = puzzle.initial_ply {
        // Lichess counts the ply of the last game move from zero
        if record.plies() != initial_ply as usize + 1 {
            tracing::warn!(
                puzzle_id = %puzzle.id,
                initial_ply,
                replayed = record.plies(),
                "Replayed ply count differs from initialPly"
            );
        }
    }

    Ok((puzzle, record))
}

/// Solutions must be non-empty, well-formed and end on a solver move.
pub fn validate_solution(solution: &[String]) -> Result<(), TrainerError> {
    if solution.is_empty() {
        return Err(TrainerError::Decode("puzzle.solution is empty".to_string()));
    }

    if let Some(bad) = solution.iter().find(|m| !notation::is_coordinate(m)) {
        return Err(TrainerError::Decode(format!(
            "puzzle.solution contains '{bad}', which is not a coordinate move"
        )));
    }

    if solution.len() % 2 == 0 {
        return Err(TrainerError::Decode(format!(
            "puzzle.solution has {} moves; expected an odd count ending on the solver's move",
            solution.len()
        )));
    }

    Ok(())
}
