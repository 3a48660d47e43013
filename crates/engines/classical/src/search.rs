//! Fixed-depth minimax search with alpha-beta pruning

use chess_core::{move_to_uci, Color, Move, Position};
use tracing::{debug, warn};

use crate::eval::Evaluator;

/// Bound larger than any reachable score, mate included.
pub const INFINITY: i32 = i32::MAX;

/// Picks moves by searching the game tree to a fixed depth and scoring the
/// leaves with an [`Evaluator`].
///
/// The position is searched in place: every move applied while descending
/// is taken back before the call returns, so the caller sees it unchanged.
#[derive(Debug, Clone, Default)]
pub struct Searcher<E> {
    evaluator: E,
    /// Nodes visited by the last search
    nodes: u64,
}

impl<E: Evaluator> Searcher<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            nodes: 0,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Returns the best move for the side to move, or `None` when the game
    /// is already over or `depth` is 0.
    pub fn get_best_move(&mut self, pos: &mut Position, depth: u8) -> Option<Move> {
        self.search(pos, depth).1
    }

    /// Root search. White maximises, Black minimises; the root decides which
    /// and every ply below alternates.
    pub fn search(&mut self, pos: &mut Position, depth: u8) -> (i32, Option<Move>) {
        self.nodes = 0;
        if depth == 0 {
            warn!(fen = %pos.fen(), "search requested at depth 0, no move will be chosen");
        }

        let maximizing = pos.side_to_move() == Color::White;
        let (score, best) = self.minimax(pos, depth, -INFINITY, INFINITY, maximizing);

        debug!(
            depth,
            nodes = self.nodes,
            score,
            best = %best.map(|mv| move_to_uci(pos.board(), mv)).unwrap_or_else(|| "none".into()),
            "search finished"
        );
        (score, best)
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// Ties keep the first move found in enumeration order. The search stops
    /// enumerating as soon as `beta <= alpha`.
    pub fn minimax(
        &mut self,
        pos: &mut Position,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;

        if depth == 0 || pos.is_game_over() {
            return (self.evaluator.evaluate(pos), None);
        }

        let mut best_move = None;

        if maximizing {
            let mut best = -INFINITY;
            for mv in pos.legal_moves() {
                pos.push(mv);
                let (score, _) = self.minimax(pos, depth - 1, alpha, beta, false);
                pos.pop();

                if score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            (best, best_move)
        } else {
            let mut best = INFINITY;
            for mv in pos.legal_moves() {
                pos.push(mv);
                let (score, _) = self.minimax(pos, depth - 1, alpha, beta, true);
                pos.pop();

                if score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            (best, best_move)
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
