#![allow(dead_code)]

use chess_trainer::chess_core::GameRecord;
use chess_trainer::puzzle::{decode_payload, Puzzle};
use chess_trainer::session::{PuzzleSession, SessionOptions, SessionStats};
use chess_trainer::error::TrainerError;
use std::io::Cursor;

/// Daily-puzzle shaped payload: after 1. e4 e5 2. Nf3 Nc6 3. Bc4 Nd4 White
/// wins a pawn with Nxe5, Black hits g2 with Qg5 and Nxf7 forks queen and rook.
pub const DAILY_PAYLOAD: &str = r#"{
    "game": {
        "id": "xyz98765",
        "perf": {"key": "rapid", "name": "Rapid"},
        "rated": true,
        "players": [
            {"name": "alice", "id": "alice", "color": "white", "rating": 1800},
            {"name": "bob", "id": "bob", "color": "black", "rating": 1790}
        ],
        "pgn": "e4 e5 Nf3 Nc6 Bc4 Nd4",
        "clock": "10+0"
    },
    "puzzle": {
        "id": "Ab12C",
        "rating": 1420,
        "plays": 8123,
        "initialPly": 5,
        "solution": ["f3e5", "d8g5", "e5f7"],
        "themes": ["fork", "middlegame", "short"]
    }
}"#;

pub fn puzzle(id: &str, solution: &[&str]) -> Puzzle {
    Puzzle {
        id: id.to_string(),
        solution: solution.iter().map(|s| s.to_string()).collect(),
        themes: vec![],
        rating: None,
        plays: None,
        initial_ply: None,
    }
}

pub fn daily() -> (Puzzle, GameRecord) {
    decode_payload(DAILY_PAYLOAD).unwrap()
}

/// Run a whole session over scripted input lines, returning stats and everything printed.
pub fn play(
    puzzle: &Puzzle,
    record: GameRecord,
    lines: &[&str],
) -> (Result<SessionStats, TrainerError>, String) {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut session = PuzzleSession::new(puzzle, record, SessionOptions::default());
    let mut out = Vec::new();
    let result = session.run(Cursor::new(script), &mut out);
    (result, String::from_utf8(out).unwrap())
}
