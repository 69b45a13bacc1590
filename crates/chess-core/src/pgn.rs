//! PGN replay on top of pgn-reader's streaming visitor.
//!
//! Only the main line is followed; comments and variations are skipped by
//! the reader. Every SAN token must be legal in the position it is played
//! from, otherwise the whole record is rejected.

use std::ops::ControlFlow;

use pgn_reader::{RawTag, Reader, SanPlus, Skip, Visitor};
use shakmaty::{fen::Fen, CastlingMode, Chess, Position};

use crate::error::ChessError;
use crate::game_data::GameMetadata;

/// Outcome of replaying one game.
#[derive(Debug)]
pub struct Replayed {
    pub metadata: GameMetadata,
    pub position: Chess,
    pub plies: usize,
}

/// Tags collected during header parsing.
#[derive(Default)]
struct GameTags {
    metadata: GameMetadata,
    fen: Option<String>,
}

/// State during movetext parsing.
struct ReplayState {
    metadata: GameMetadata,
    position: Chess,
    plies: usize,
    error: Option<ChessError>,
}

/// Visitor that plays every main-line SAN onto a position.
struct GameReplayer;

impl Visitor for GameReplayer {
    type Tags = GameTags;
    type Movetext = ReplayState;
    type Output = Result<Replayed, ChessError>;

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, GameTags> {
        ControlFlow::Continue(GameTags::default())
    }

    fn tag(
        &mut self,
        tags: &mut GameTags,
        name: &[u8],
        value: RawTag<'_>,
    ) -> ControlFlow<Self::Output> {
        let value = value.decode_utf8_lossy().into_owned();
        match name {
            b"Event" => tags.metadata.event = Some(value),
            b"Site" => tags.metadata.site = Some(value),
            b"White" => tags.metadata.white = Some(value),
            b"Black" => tags.metadata.black = Some(value),
            b"Result" => tags.metadata.result = Some(value),
            b"FEN" => tags.fen = Some(value),
            _ => {}
        }
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, tags: GameTags) -> ControlFlow<Self::Output, ReplayState> {
        let (position, error) = match tags.fen.as_deref() {
            Some(fen) => match position_from_fen(fen) {
                Ok(pos) => (pos, None),
                Err(e) => (Chess::default(), Some(e)),
            },
            None => (Chess::default(), None),
        };

        ControlFlow::Continue(ReplayState {
            metadata: tags.metadata,
            position,
            plies: 0,
            error,
        })
    }

    fn san(&mut self, state: &mut ReplayState, san_plus: SanPlus) -> ControlFlow<Self::Output> {
        // Once broken, the rest of the movetext is meaningless
        if state.error.is_some() {
            return ControlFlow::Continue(());
        }

        match san_plus.san.to_move(&state.position) {
            Ok(mv) => {
                state.position.play_unchecked(mv);
                state.plies += 1;
            }
            Err(e) => {
                state.error = Some(ChessError::Pgn(format!(
                    "illegal move '{}' at ply {}: {e}",
                    san_plus,
                    state.plies + 1
                )));
            }
        }

        ControlFlow::Continue(())
    }

    fn begin_variation(&mut self, _state: &mut ReplayState) -> ControlFlow<Self::Output, Skip> {
        ControlFlow::Continue(Skip(true))
    }

    fn end_game(&mut self, state: ReplayState) -> Self::Output {
        if let Some(e) = state.error {
            return Err(e);
        }
        Ok(Replayed {
            metadata: state.metadata,
            position: state.position,
            plies: state.plies,
        })
    }
}

fn position_from_fen(fen: &str) -> Result<Chess, ChessError> {
    let parsed: Fen = fen
        .parse()
        .map_err(|e| ChessError::Pgn(format!("invalid FEN '{fen}': {e}")))?;
    parsed
        .into_position(CastlingMode::Standard)
        .map_err(|e| ChessError::Pgn(format!("impossible FEN position '{fen}': {e}")))
}

/// Replay the first game found in `pgn`.
pub fn replay(pgn: &str) -> Result<Replayed, ChessError> {
    let mut reader = Reader::new(pgn.as_bytes());
    reader
        .read_game(&mut GameReplayer)
        .map_err(|e| ChessError::Pgn(format!("read error: {e}")))?
        .ok_or_else(|| ChessError::Pgn("no game found".to_string()))?
}
