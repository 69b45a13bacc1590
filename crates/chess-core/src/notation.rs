//! Move notation helpers: coordinate (UCI) decoding and algebraic (SAN) encoding.

use shakmaty::{san::San, uci::UciMove, CastlingMode, Chess, Color, Move, Position};

use crate::error::ChessError;

/// True if `notation` is a well-formed coordinate move like "e2e4" or "e7e8q".
/// Says nothing about legality.
pub fn is_coordinate(notation: &str) -> bool {
    matches!(notation.parse::<UciMove>(), Ok(UciMove::Normal { .. }))
}

/// Decode a coordinate move against `pos`.
pub fn decode_coordinate(pos: &Chess, notation: &str) -> Result<Move, ChessError> {
    let uci: UciMove = notation
        .trim()
        .parse()
        .map_err(|_| ChessError::InvalidCoordinate(notation.to_string()))?;

    uci.to_move(pos).map_err(|_| ChessError::IllegalMove {
        notation: notation.to_string(),
        position: describe_position(pos),
    })
}

/// Coordinate form of a move, castling written as the king's two-square step.
pub fn to_coordinate(mv: Move) -> String {
    mv.to_uci(CastlingMode::Standard).to_string()
}

/// Algebraic form of `mv` played from `pos`, with a `+` or `#` suffix when
/// the move gives check or mate.
pub fn to_algebraic(pos: &Chess, mv: Move) -> String {
    let san = San::from_move(pos, mv);

    let mut after = pos.clone();
    after.play_unchecked(mv);
    let suffix = if after.is_checkmate() {
        "#"
    } else if after.is_check() {
        "+"
    } else {
        ""
    };

    format!("{san}{suffix}")
}

/// Drop a trailing check or mate marker.
pub fn strip_check_suffix(algebraic: &str) -> &str {
    algebraic.trim_end_matches(['+', '#'])
}

pub fn side_to_move_label(pos: &Chess) -> &'static str {
    color_label(pos.turn())
}

pub fn color_label(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn describe_position(pos: &Chess) -> String {
    format!("{} {}", pos.board(), pos.turn().char())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pgn::replay;

    #[test]
    fn test_decode_and_encode_opening_move() {
        let pos = Chess::default();
        let mv = decode_coordinate(&pos, "g1f3").unwrap();
        assert_eq!(to_algebraic(&pos, mv), "Nf3");
        assert_eq!(to_coordinate(mv), "g1f3");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let pos = Chess::default();
        assert!(matches!(
            decode_coordinate(&pos, "Nf3"),
            Err(ChessError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_decode_rejects_illegal_move() {
        let pos = Chess::default();
        let err = decode_coordinate(&pos, "e2e5").unwrap_err();
        assert!(matches!(err, ChessError::IllegalMove { .. }));
        assert!(!err.is_pgn());
    }

    #[test]
    fn test_algebraic_marks_check_and_mate() {
        // Scholar's mate setup: Qxf7 is mate
        let pos = replay("e4 e5 Bc4 Nc6 Qh5 Nf6").unwrap().position;
        let mv = decode_coordinate(&pos, "h5f7").unwrap();
        assert_eq!(to_algebraic(&pos, mv), "Qxf7#");

        let pos = replay("e4 f6 d4 g5").unwrap().position;
        let mv = decode_coordinate(&pos, "d1h5").unwrap();
        assert_eq!(to_algebraic(&pos, mv), "Qh5#");

        let pos = replay("e4 d5").unwrap().position;
        let mv = decode_coordinate(&pos, "f1b5").unwrap();
        assert_eq!(to_algebraic(&pos, mv), "Bb5+");
    }

    #[test]
    fn test_castling_coordinates() {
        let pos = replay("e4 e5 Nf3 Nc6 Bc4 Bc5").unwrap().position;
        let mv = decode_coordinate(&pos, "e1g1").unwrap();
        assert_eq!(to_algebraic(&pos, mv), "O-O");
        assert_eq!(to_coordinate(mv), "e1g1");
    }

    #[test]
    fn test_promotion_coordinates() {
        let pgn = "[FEN \"8/4P1k1/8/8/8/8/8/4K3 w - - 0 1\"]\n\n*";
        let pos = crate::GameRecord::from_pgn("promo", pgn)
            .unwrap()
            .position()
            .clone();
        let mv = decode_coordinate(&pos, "e7e8q").unwrap();
        assert_eq!(to_algebraic(&pos, mv), "e8=Q");
        assert_eq!(to_coordinate(mv), "e7e8q");
    }

    #[test]
    fn test_is_coordinate() {
        assert!(is_coordinate("e2e4"));
        assert!(is_coordinate("a7a8n"));
        assert!(!is_coordinate("0000"));
        assert!(!is_coordinate("e4"));
        assert!(!is_coordinate(""));
    }

    #[test]
    fn test_strip_check_suffix() {
        assert_eq!(strip_check_suffix("Qxf7#"), "Qxf7");
        assert_eq!(strip_check_suffix("Bb5+"), "Bb5");
        assert_eq!(strip_check_suffix("e4"), "e4");
    }

    #[test]
    fn test_side_to_move_label() {
        let pos = Chess::default();
        assert_eq!(side_to_move_label(&pos), "White");
        let pos = replay("e4").unwrap().position;
        assert_eq!(side_to_move_label(&pos), "Black");
    }
}
