//! Chess rules adapter for the puzzle trainer.
//!
//! Wraps shakmaty and pgn-reader behind the handful of operations the
//! trainer needs: replaying a game record, decoding coordinate moves and
//! encoding moves back into human-readable notation.

pub use shakmaty;

pub mod error;
pub mod game_data;
pub mod notation;
pub mod pgn;

pub use error::ChessError;
pub use game_data::{GameMetadata, GameRecord};
