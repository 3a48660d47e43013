//! Errors raised by the rules adapter.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChessError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("malformed move text '{0}'")]
    MalformedMove(String),

    #[error("illegal move {mv} in position {fen}")]
    IllegalMove { mv: String, fen: String },
}
