pub mod board;
pub mod error;
pub mod movegen;
pub mod outcome;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::ChessError;
pub use movegen::*;
pub use outcome::*;
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait, implemented by every move-selection engine
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves, or depth 0)
    pub best_move: Option<Move>,
    /// Evaluation in centipawns; positive favours White whoever is to move
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
///
/// Lets the match runner pit differently configured engines against each
/// other without knowing how they pick moves.
pub trait Engine: Send {
    /// Search the position to a fixed depth.
    ///
    /// The caller's position is left untouched.
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
