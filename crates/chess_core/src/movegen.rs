use crate::{board::Position, types::*};

/// Generate all legal moves, returning a freshly allocated vector.
///
/// The order is the rules library's enumeration order. It is deterministic
/// and stable for an unmutated position, which the search relies on for
/// tie-breaking.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(pos, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    pos.board().generate_moves(|moves| {
        out.extend(moves);
        false
    });
}

/// Stops at the first piece with a legal move.
pub fn has_legal_moves(pos: &Position) -> bool {
    pos.board().generate_moves(|moves| !moves.is_empty())
}

/// Whether the side to move can capture en passant right now. The rules
/// library records the en passant file after every double pawn push, legal
/// capture or not.
pub fn has_en_passant_capture(board: &Board) -> bool {
    let Some(file) = board.en_passant() else {
        return false;
    };
    let rank = match board.side_to_move() {
        Color::White => Rank::Sixth,
        Color::Black => Rank::Third,
    };
    let target = Square::new(file, rank);
    board.generate_moves_for(board.pieces(Piece::Pawn), |moves| moves.to.has(target))
}
