use std::path::PathBuf;

use chess_core::ChessError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid match configuration: {0}")]
    InvalidConfig(String),

    #[error("{engine} returned no move in unfinished position {fen}")]
    NoMove { engine: String, fen: String },

    #[error(transparent)]
    Chess(#[from] ChessError),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse match configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to (de)serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
