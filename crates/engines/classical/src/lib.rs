//! Classical Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a static evaluation.
//! Two evaluators are available: plain material counting, and material plus
//! piece-square tables. Both share the same search.

mod eval;
mod pst;
mod search;

use chess_core::{Engine, Position, SearchResult};

pub use eval::{
    is_endgame, EvalVariant, Evaluator, MaterialEvaluator, PieceSquareEvaluator, DRAW_SCORE,
    MATE_SCORE, PIECE_VALUES,
};
pub use pst::{KING_ENDGAME_TABLE, PIECE_SQUARE_TABLES};
pub use search::{Searcher, INFINITY};

/// Classical chess engine: a [`Searcher`] paired with the evaluator chosen
/// by its [`EvalVariant`].
pub struct ClassicalEngine {
    variant: EvalVariant,
    name: String,
    searcher: Searcher<Box<dyn Evaluator>>,
}

impl ClassicalEngine {
    pub fn new(variant: EvalVariant) -> Self {
        Self {
            variant,
            name: format!("Classical ({variant})"),
            searcher: Searcher::new(variant.evaluator()),
        }
    }

    pub fn variant(&self) -> EvalVariant {
        self.variant
    }
}

impl Default for ClassicalEngine {
    fn default() -> Self {
        Self::new(EvalVariant::default())
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        // Search a private copy; the undo stack comes along for repetition checks.
        let mut scratch = pos.clone();
        let (score, best_move) = self.searcher.search(&mut scratch, depth);

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.searcher.nodes(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
