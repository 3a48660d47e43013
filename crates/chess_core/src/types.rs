//! Board primitives, re-exported from the rules library so every crate in
//! the workspace names the same types.

pub use cozy_chess::{BitBoard, Board, Color, File, Move, Piece, Rank, Square};

/// Reflects a square across the board's horizontal midline (rank r -> 7 - r,
/// same file). Squares are indexed a1 = 0 .. h8 = 63, file varying fastest.
#[inline]
pub fn mirror_index(sq: usize) -> usize {
    sq ^ 56
}

/// Returns the opposing colour.
#[inline]
pub fn opponent(color: Color) -> Color {
    match color {
        Color::White => Color::Black,
        Color::Black => Color::White,
    }
}
