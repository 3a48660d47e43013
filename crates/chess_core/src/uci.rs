//! Move text in UCI long algebraic form.
//!
//! The rules library encodes castling as the king capturing its own rook
//! (e1h1). Standard UCI writes the king's destination instead (e1g1), so
//! both directions translate between the two.

use crate::{board::Position, error::ChessError, movegen::legal_moves, types::*};

pub fn move_to_uci(board: &Board, mv: Move) -> String {
    let stm = board.side_to_move();
    if board.piece_on(mv.from) == Some(Piece::King) && board.color_on(mv.to) == Some(stm) {
        let file = if (mv.to.file() as usize) > (mv.from.file() as usize) {
            File::G
        } else {
            File::C
        };
        return format!("{}{}", mv.from, Square::new(file, mv.from.rank()));
    }
    mv.to_string()
}

pub fn parse_uci_move(pos: &Position, txt: &str) -> Result<Move, ChessError> {
    let txt = txt.trim();
    let mut mv: Move = txt
        .parse()
        .map_err(|_| ChessError::MalformedMove(txt.to_string()))?;

    let board = pos.board();
    if board.piece_on(mv.from) == Some(Piece::King) && board.color_on(mv.to).is_none() {
        let span = mv.to.file() as i8 - mv.from.file() as i8;
        if span.abs() == 2 {
            let rights = board.castle_rights(board.side_to_move());
            let rook_file = if span > 0 { rights.short } else { rights.long };
            if let Some(file) = rook_file {
                mv.to = Square::new(file, mv.from.rank());
            }
        }
    }

    if legal_moves(pos).contains(&mv) {
        Ok(mv)
    } else {
        Err(ChessError::IllegalMove {
            mv: txt.to_string(),
            fen: pos.fen(),
        })
    }
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
