//! Game records, match tallies and report output

use std::path::Path;

use chess_core::{Color, Termination};
use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::error::MatchError;

/// Colour as stored in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl From<Color> for Side {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEnd {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
    /// Adjudicated a draw after `max_plies`
    MoveLimit,
}

impl From<Termination> for GameEnd {
    fn from(termination: Termination) -> Self {
        match termination {
            Termination::Checkmate => GameEnd::Checkmate,
            Termination::Stalemate => GameEnd::Stalemate,
            Termination::InsufficientMaterial => GameEnd::InsufficientMaterial,
            Termination::SeventyFiveMoves => GameEnd::SeventyFiveMoves,
            Termination::FivefoldRepetition => GameEnd::FivefoldRepetition,
        }
    }
}

/// Result of a single game from one engine's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Wins, losses and draws across a match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Points per game, draws counting half
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total as f64
    }
}

/// One engine move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Ply number within the game, starting at 1 after any opening plies
    pub ply: u32,
    pub side: Side,
    pub uci: String,
    /// Wall-clock seconds spent in the search call
    pub elapsed_secs: f64,
    /// Search score, White-positive
    pub score: i32,
    pub nodes: u64,
}

/// A finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Whether engine A had the white pieces
    pub engine_a_white: bool,
    pub white: String,
    pub black: String,
    pub start_fen: String,
    /// Random plies played before the engines took over
    pub opening: Vec<String>,
    pub moves: Vec<MoveRecord>,
    /// "1-0", "0-1" or "1/2-1/2"
    pub result: String,
    pub winner: Option<Side>,
    pub termination: GameEnd,
}

impl GameRecord {
    /// Result from engine A's point of view
    pub fn result_for_engine_a(&self) -> GameResult {
        let a_side = if self.engine_a_white { Side::White } else { Side::Black };
        match self.winner {
            None => GameResult::Draw,
            Some(side) if side == a_side => GameResult::Win,
            Some(_) => GameResult::Loss,
        }
    }

    /// Moves made by the engine playing `side`
    pub fn moves_by(&self, side: Side) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter().filter(move |m| m.side == side)
    }
}

/// Thinking time of one engine across a match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineStats {
    pub name: String,
    pub moves: u32,
    pub total_secs: f64,
    pub total_nodes: u64,
}

impl EngineStats {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn add(&mut self, record: &MoveRecord) {
        self.moves += 1;
        self.total_secs += record.elapsed_secs;
        self.total_nodes += record.nodes;
    }

    /// Mean seconds per move, 0 when the engine never moved
    pub fn average_secs(&self) -> f64 {
        if self.moves == 0 {
            0.0
        } else {
            self.total_secs / self.moves as f64
        }
    }
}

/// Everything recorded over a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub config: MatchConfig,
    pub engine_a: EngineStats,
    pub engine_b: EngineStats,
    /// Tally from engine A's point of view
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    pub fn new(config: MatchConfig, engine_a: &str, engine_b: &str) -> Self {
        Self {
            config,
            engine_a: EngineStats::new(engine_a),
            engine_b: EngineStats::new(engine_b),
            result: MatchResult::new(),
            games: Vec::new(),
        }
    }

    /// Fold a finished game into the tallies
    pub fn add_game(&mut self, game: GameRecord) {
        let (a_side, b_side) = if game.engine_a_white {
            (Side::White, Side::Black)
        } else {
            (Side::Black, Side::White)
        };
        for record in game.moves_by(a_side) {
            self.engine_a.add(record);
        }
        for record in game.moves_by(b_side) {
            self.engine_b.add(record);
        }
        self.result.record(game.result_for_engine_a());
        self.games.push(game);
    }

    pub fn total_moves(&self) -> usize {
        self.games.iter().map(|g| g.moves.len()).sum()
    }

    /// Save report to a pretty-printed JSON file
    pub fn save(&self, path: &Path) -> Result<(), MatchError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| MatchError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a report written by [`MatchReport::save`]
    pub fn load(path: &Path) -> Result<Self, MatchError> {
        let contents = std::fs::read_to_string(path).map_err(|source| MatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Text summary: results, move counts and per-engine timing
    pub fn summary(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n",
            self.engine_a.name, self.engine_b.name
        ));
        report.push_str(&format!(
            "Games: {}, Depth: {}\n\n",
            self.games.len(),
            self.config.depth
        ));

        for (i, game) in self.games.iter().enumerate() {
            report.push_str(&format!(
                "Game {}: {} vs {}  {} ({:?}, {} moves)\n",
                i + 1,
                game.white,
                game.black,
                game.result,
                game.termination,
                game.moves.len()
            ));
        }

        report.push('\n');
        report.push_str(&format!("Total moves: {}\n", self.total_moves()));
        report.push_str(&format!(
            "{}: {} wins, {} losses, {} draws (score {:.1}%)\n\n",
            self.engine_a.name,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));

        report.push_str(&format!(
            "{:<20} {:>6} {:>12} {:>12}\n",
            "Engine", "Moves", "Avg (s)", "Total (s)"
        ));
        report.push_str(&"-".repeat(53));
        report.push('\n');
        for stats in [&self.engine_a, &self.engine_b] {
            report.push_str(&format!(
                "{:<20} {:>6} {:>12.4} {:>12.4}\n",
                stats.name,
                stats.moves,
                stats.average_secs(),
                stats.total_secs
            ));
        }
        report
    }

    /// Print summary to stdout
    pub fn print_summary(&self) {
        println!("{}", self.summary());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
