//! Match configuration, loadable from TOML

use std::path::Path;

use chess_core::Position;
use classical_engine::EvalVariant;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Evaluator for the first engine
    pub engine_a: EvalVariant,
    /// Evaluator for the second engine
    pub engine_b: EvalVariant,
    /// Number of games to play
    pub games: u32,
    /// Search depth in plies for both engines
    pub depth: u8,
    /// Plies after which an unfinished game is adjudicated a draw (None = play to the end)
    pub max_plies: Option<u32>,
    /// Whether engine A takes Black every other game
    pub alternate_colors: bool,
    /// Random legal plies played before the engines take over
    pub opening_plies: u32,
    /// Seed for the opening randomizer (None = fresh entropy)
    pub seed: Option<u64>,
    /// Starting position (None = standard start)
    pub start_fen: Option<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            engine_a: EvalVariant::Material,
            engine_b: EvalVariant::PieceSquare,
            games: 1,
            depth: 4,
            max_plies: None,
            alternate_colors: true,
            opening_plies: 0,
            seed: None,
            start_fen: None,
        }
    }
}

impl MatchConfig {
    /// Load a configuration file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, MatchError> {
        let contents = std::fs::read_to_string(path).map_err(|source| MatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, MatchError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that cannot produce a game.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.depth == 0 {
            return Err(MatchError::InvalidConfig(
                "depth must be at least 1".to_string(),
            ));
        }
        if self.games == 0 {
            return Err(MatchError::InvalidConfig(
                "games must be at least 1".to_string(),
            ));
        }
        if self.max_plies == Some(0) {
            return Err(MatchError::InvalidConfig(
                "max_plies must be at least 1".to_string(),
            ));
        }
        self.start_position()?;
        Ok(())
    }

    /// Position every game starts from, before any random opening plies.
    pub fn start_position(&self) -> Result<Position, MatchError> {
        match &self.start_fen {
            Some(fen) => Ok(Position::from_fen(fen)?),
            None => Ok(Position::startpos()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
