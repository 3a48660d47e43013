//! Game termination reasons and the insufficient-material rule.

use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub termination: Termination,
    /// `None` for every draw.
    pub winner: Option<Color>,
}

impl Outcome {
    /// PGN-style result string.
    pub fn result(&self) -> &'static str {
        match self.winner {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        }
    }
}

/// Whether `color` can never deliver mate, whatever the opponent does.
///
/// A lone knight only counts as insufficient when the opponent has nothing
/// but king and queens to block with; bishops are insufficient when every
/// bishop on the board stands on one square colour and no pawns or knights
/// remain.
pub fn has_insufficient_material(board: &Board, color: Color) -> bool {
    let ours = board.colors(color);
    let pawns = board.pieces(Piece::Pawn);
    let knights = board.pieces(Piece::Knight);
    let bishops = board.pieces(Piece::Bishop);
    let heavy = pawns | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);

    if !(ours & heavy).is_empty() {
        return false;
    }

    if !(ours & knights).is_empty() {
        let theirs = board.colors(opponent(color));
        let blockers = pawns | knights | bishops | board.pieces(Piece::Rook);
        return ours.len() <= 2 && (theirs & blockers).is_empty();
    }

    if !(ours & bishops).is_empty() {
        let mut shades = bishops
            .into_iter()
            .map(|sq| (sq.file() as usize + sq.rank() as usize) % 2);
        let first = shades.next();
        let same_shade = shades.all(|s| Some(s) == first);
        return same_shade && pawns.is_empty() && knights.is_empty();
    }

    true
}
