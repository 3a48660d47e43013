use crate::error::ChessError;
use crate::movegen::{has_en_passant_capture, has_legal_moves, legal_moves};
use crate::outcome::{Outcome, Termination, has_insufficient_material};
use crate::types::*;

/// Plies without a capture or pawn move after which the game is drawn.
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Occurrences of one position that end the game by repetition.
pub const FIVEFOLD: usize = 5;

#[derive(Clone, Debug)]
struct Undo {
    board: Board,
    halfmove_clock: u32,
    repetition_key: u64,
    mv: Move,
}

/// Identity of a position for repetition counting. The en passant file only
/// takes part when an en passant capture is actually available.
fn repetition_key(board: &Board) -> u64 {
    if has_en_passant_capture(board) {
        board.hash()
    } else {
        board.hash_without_ep()
    }
}

/// A game in progress: the current board plus the stack of boards that
/// preceded it, so moves can be applied and taken back in LIFO order.
///
/// The halfmove clock is tracked here rather than read from the board
/// because the rules library saturates its own clock at 100 plies.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    halfmove_clock: u32,
    history: Vec<Undo>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_board(board: Board) -> Self {
        let halfmove_clock = board.halfmove_clock() as u32;
        Position {
            board,
            halfmove_clock,
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let mut fields: Vec<&str> = fen.split_whitespace().collect();
        // The library rejects clocks above 100; keep the real value ourselves.
        let clock: Option<u32> = fields.get(4).and_then(|s| s.parse().ok());
        if clock.is_some_and(|c| c > 100) {
            fields[4] = "100";
        }

        let board =
            Board::from_fen(&fields.join(" "), false).map_err(|e| ChessError::InvalidFen {
                fen: fen.to_string(),
                reason: format!("{e:?}"),
            })?;
        let mut pos = Self::from_board(board);
        if let Some(clock) = clock {
            pos.halfmove_clock = clock;
        }
        Ok(pos)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// FEN of the current board, with the uncapped halfmove clock.
    pub fn fen(&self) -> String {
        let fen = self.board.to_string();
        let mut fields: Vec<&str> = fen.split_whitespace().collect();
        let clock = self.halfmove_clock.to_string();
        if let Some(field) = fields.get_mut(4) {
            *field = &clock;
        }
        fields.join(" ")
    }

    /// Zobrist key of the current board (pieces, side, castling, en passant).
    pub fn hash(&self) -> u64 {
        self.board.hash()
    }

    /// Number of moves applied since this position was constructed.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        self.board.piece_on(sq).zip(self.board.color_on(sq))
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    /// Applies `mv`, which must come from [`Position::legal_moves`].
    pub fn push(&mut self, mv: Move) {
        let stm = self.board.side_to_move();
        let irreversible = self.board.piece_on(mv.from) == Some(Piece::Pawn)
            || self.board.color_on(mv.to) == Some(opponent(stm));

        self.history.push(Undo {
            board: self.board.clone(),
            halfmove_clock: self.halfmove_clock,
            repetition_key: repetition_key(&self.board),
            mv,
        });
        self.board.play_unchecked(mv);
        self.halfmove_clock = if irreversible {
            0
        } else {
            self.halfmove_clock + 1
        };
    }

    /// Applies `mv` after checking it against the legal move list.
    pub fn try_push(&mut self, mv: Move) -> Result<(), ChessError> {
        if !self.legal_moves().contains(&mv) {
            return Err(ChessError::IllegalMove {
                mv: mv.to_string(),
                fen: self.fen(),
            });
        }
        self.push(mv);
        Ok(())
    }

    /// Takes back the most recently applied move.
    pub fn pop(&mut self) -> Option<Move> {
        let undo = self.history.pop()?;
        self.board = undo.board;
        self.halfmove_clock = undo.halfmove_clock;
        Some(undo.mv)
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !has_legal_moves(self)
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !has_legal_moves(self)
    }

    pub fn is_insufficient_material(&self) -> bool {
        has_insufficient_material(&self.board, Color::White)
            && has_insufficient_material(&self.board, Color::Black)
    }

    pub fn is_seventyfive_moves(&self) -> bool {
        self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES && has_legal_moves(self)
    }

    /// True once the current position has occurred five times. Only
    /// positions since the last capture or pawn move can repeat it.
    pub fn is_fivefold_repetition(&self) -> bool {
        let key = repetition_key(&self.board);
        let earlier = self
            .history
            .iter()
            .rev()
            .take(self.halfmove_clock as usize)
            .filter(|u| u.repetition_key == key)
            .count();
        earlier + 1 >= FIVEFOLD
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// How the game ended, or `None` while it is still in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_checkmate() {
            return Some(Outcome {
                termination: Termination::Checkmate,
                winner: Some(opponent(self.side_to_move())),
            });
        }
        let termination = if self.is_insufficient_material() {
            Termination::InsufficientMaterial
        } else if self.is_stalemate() {
            Termination::Stalemate
        } else if self.is_seventyfive_moves() {
            Termination::SeventyFiveMoves
        } else if self.is_fivefold_repetition() {
            Termination::FivefoldRepetition
        } else {
            return None;
        };
        Some(Outcome {
            termination,
            winner: None,
        })
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
