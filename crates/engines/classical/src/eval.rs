//! Static position evaluation.
//!
//! Scores are in centipawns and always from White's point of view: positive
//! favours White, negative favours Black, regardless of who is to move.

use std::fmt;
use std::str::FromStr;

use chess_core::{mirror_index, BitBoard, Board, Color, Piece, Position};
use serde::{Deserialize, Serialize};

use crate::pst::{KING_ENDGAME_TABLE, PIECE_SQUARE_TABLES};

/// Score of a position in which one side has been mated.
pub const MATE_SCORE: i32 = 20_000;

/// Score of every drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Material values in centipawns, indexed by piece ordinal.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 20_000];

/// Scores a position. Implementations are pure: same position, same score.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, pos: &Position) -> i32;
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn evaluate(&self, pos: &Position) -> i32 {
        (**self).evaluate(pos)
    }
}

/// Mate and draw scores, checked before any material is counted.
///
/// The side to move is the side that has been mated, so the score goes
/// to its opponent.
fn terminal_score(pos: &Position) -> Option<i32> {
    if pos.is_checkmate() {
        return Some(match pos.side_to_move() {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        });
    }
    if pos.is_stalemate() || pos.is_insufficient_material() {
        return Some(DRAW_SCORE);
    }
    None
}

fn pieces_of(board: &Board, color: Color, piece: Piece) -> BitBoard {
    board.colors(color) & board.pieces(piece)
}

/// Counts material only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, pos: &Position) -> i32 {
        if let Some(score) = terminal_score(pos) {
            return score;
        }

        let board = pos.board();
        let mut score = 0i32;
        for piece in Piece::ALL {
            let value = PIECE_VALUES[piece as usize];
            let white = pieces_of(board, Color::White, piece).len() as i32;
            let black = pieces_of(board, Color::Black, piece).len() as i32;
            score += value * (white - black);
        }
        score
    }
}

/// Material plus piece-square bonuses, with a separate king table for the
/// endgame.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareEvaluator;

impl Evaluator for PieceSquareEvaluator {
    fn evaluate(&self, pos: &Position) -> i32 {
        if let Some(score) = terminal_score(pos) {
            return score;
        }

        let board = pos.board();
        let endgame = is_endgame(board);
        let mut score = 0i32;
        for piece in Piece::ALL {
            let value = PIECE_VALUES[piece as usize];
            let table = if piece == Piece::King && endgame {
                &KING_ENDGAME_TABLE
            } else {
                &PIECE_SQUARE_TABLES[piece as usize]
            };

            for sq in pieces_of(board, Color::White, piece) {
                score += value + table[sq as usize];
            }
            for sq in pieces_of(board, Color::Black, piece) {
                score -= value + table[mirror_index(sq as usize)];
            }
        }
        score
    }
}

/// Endgame once neither side has a queen, or every side that still has one
/// has no rook and at most one minor piece beside it.
pub fn is_endgame(board: &Board) -> bool {
    [Color::White, Color::Black].into_iter().all(|color| {
        if pieces_of(board, color, Piece::Queen).is_empty() {
            return true;
        }
        let rooks = pieces_of(board, color, Piece::Rook).len();
        let minors = pieces_of(board, color, Piece::Knight).len()
            + pieces_of(board, color, Piece::Bishop).len();
        rooks == 0 && minors <= 1
    })
}

/// Which evaluator an engine is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvalVariant {
    /// Material counting only
    Material,
    /// Material plus piece-square tables
    #[default]
    #[serde(alias = "pst")]
    PieceSquare,
}

impl EvalVariant {
    pub fn evaluator(self) -> Box<dyn Evaluator> {
        match self {
            EvalVariant::Material => Box::new(MaterialEvaluator),
            EvalVariant::PieceSquare => Box::new(PieceSquareEvaluator),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EvalVariant::Material => "material",
            EvalVariant::PieceSquare => "pst",
        }
    }
}

impl fmt::Display for EvalVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvalVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "material" | "v1" => Ok(EvalVariant::Material),
            "pst" | "piece-square" | "v2" => Ok(EvalVariant::PieceSquare),
            other => Err(format!(
                "unknown evaluator '{other}' (expected 'material' or 'pst')"
            )),
        }
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
