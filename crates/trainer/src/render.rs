//! Text board rendering.
//!
//! The board is always drawn from the perspective it is given: with
//! `flip = false` White's home rank is at the bottom and files run a..h,
//! with `flip = true` Black's home rank is at the bottom and files run h..a.

use std::fmt::Write as _;
use std::io::{self, Write};

use colored::Colorize;
use shakmaty::{Board, Color, File, Piece, Rank, Square};

const BORDER: &str = " +----------------+";

/// Render `board` as an 8x8 grid with rank labels on both sides and file
/// labels above and below. Starts and ends with a blank line.
pub fn render_board(board: &Board, flip: bool, colorize: bool) -> String {
    let files: Vec<u32> = if flip {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };
    let ranks: Vec<u32> = if flip {
        (0..8).collect()
    } else {
        (0..8).rev().collect()
    };

    let header = files.iter().fold(String::from(" "), |mut acc, &f| {
        acc.push(' ');
        acc.push(File::new(f).char());
        acc
    });

    let mut out = String::new();
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out.push_str(BORDER);
    out.push('\n');

    for &r in &ranks {
        let label = r + 1;
        let _ = write!(out, "{label}|");
        for &f in &files {
            let square = Square::from_coords(File::new(f), Rank::new(r));
            let _ = write!(out, "{} ", glyph(board.piece_at(square), colorize));
        }
        let _ = writeln!(out, "|{label}");
    }

    out.push_str(BORDER);
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out.push('\n');
    out
}

/// Write the rendered board to `out`.
pub fn draw<W: Write>(out: &mut W, board: &Board, flip: bool, colorize: bool) -> io::Result<()> {
    out.write_all(render_board(board, flip, colorize).as_bytes())?;
    out.flush()
}

/// Orientation for showing the board to `perspective`.
pub fn flip_for(perspective: Color) -> bool {
    perspective == Color::Black
}

fn glyph(piece: Option<Piece>, colorize: bool) -> String {
    let Some(piece) = piece else {
        return ".".to_string();
    };

    let symbol = piece.char().to_string();
    if !colorize {
        return symbol;
    }
    match piece.color {
        Color::White => symbol.blue().to_string(),
        Color::Black => symbol.red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::{Chess, Position};

    fn lines(s: &str) -> Vec<&str> {
        s.lines().collect()
    }

    #[test]
    fn test_white_perspective() {
        let board = Chess::default().board().clone();
        let text = render_board(&board, false, false);
        let rows = lines(&text);

        assert_eq!(rows[0], "");
        assert_eq!(rows[1], "  a b c d e f g h");
        assert_eq!(rows[2], BORDER);
        assert_eq!(rows[3], "8|r n b q k b n r |8");
        assert_eq!(rows[4], "7|p p p p p p p p |7");
        assert_eq!(rows[5], "6|. . . . . . . . |6");
        assert_eq!(rows[9], "2|P P P P P P P P |2");
        assert_eq!(rows[10], "1|R N B Q K B N R |1");
        assert_eq!(rows[11], BORDER);
        assert_eq!(rows[12], "  a b c d e f g h");
        assert_eq!(rows.len(), 13);
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_black_perspective() {
        let board = Chess::default().board().clone();
        let text = render_board(&board, true, false);
        let rows = lines(&text);

        assert_eq!(rows[1], "  h g f e d c b a");
        assert_eq!(rows[3], "1|R N B K Q B N R |1");
        assert_eq!(rows[4], "2|P P P P P P P P |2");
        assert_eq!(rows[9], "7|p p p p p p p p |7");
        assert_eq!(rows[10], "8|r n b k q b n r |8");
        assert_eq!(rows[12], "  h g f e d c b a");
    }

    #[test]
    fn test_flip_for() {
        assert!(!flip_for(Color::White));
        assert!(flip_for(Color::Black));
    }

    #[test]
    fn test_colorize_keeps_grid_shape() {
        colored::control::set_override(true);
        let board = Chess::default().board().clone();
        let text = render_board(&board, false, true);
        assert!(text.contains("\u{1b}["));
        assert_eq!(lines(&text).len(), 13);
        assert!(lines(&text)[5].starts_with("6|. . . . . . . . |6"));
    }

    #[test]
    fn test_render_does_not_touch_board() {
        let board = Chess::default().board().clone();
        let before = board.clone();
        let _ = render_board(&board, true, false);
        assert_eq!(board, before);
    }
}
