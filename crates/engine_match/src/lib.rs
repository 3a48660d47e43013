//! Engine match runner
//!
//! Pits two engine configurations against each other move by move and
//! records:
//! - every move with the wall-clock time spent choosing it
//! - the final result and how the game ended
//! - per-engine timing statistics across the match
//!
//! # Usage
//!
//! ```bash
//! # Material-only engine against the piece-square engine, depth 4
//! cargo run -p engine_match -- --engine-a material --engine-b pst --depth 4
//!
//! # Settings from a file, report written as JSON
//! cargo run -p engine_match -- --config match.toml --output report.json
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
