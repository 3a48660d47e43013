//! Engine match CLI
//!
//! Plays two evaluator configurations against each other and reports
//! per-move timing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use classical_engine::{ClassicalEngine, EvalVariant};
use engine_match::{MatchConfig, MatchRunner};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "engine-match", about = "Play two engine configurations against each other")]
struct Cli {
    /// Evaluator for engine A (material | pst)
    #[arg(long)]
    engine_a: Option<EvalVariant>,

    /// Evaluator for engine B (material | pst)
    #[arg(long)]
    engine_b: Option<EvalVariant>,

    /// Search depth in plies
    #[arg(short, long)]
    depth: Option<u8>,

    /// Number of games
    #[arg(short, long)]
    games: Option<u32>,

    /// Adjudicate a draw after this many engine plies
    #[arg(long)]
    max_plies: Option<u32>,

    /// Random plies played before the engines take over
    #[arg(long)]
    opening_plies: Option<u32>,

    /// Seed for the random openings
    #[arg(long)]
    seed: Option<u64>,

    /// Starting position in FEN
    #[arg(long)]
    fen: Option<String>,

    /// Keep the same colours every game
    #[arg(long)]
    no_alternate: bool,

    /// Match settings in TOML; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the full report as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn match_config(&self) -> Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => MatchConfig::default(),
        };

        if let Some(variant) = self.engine_a {
            config.engine_a = variant;
        }
        if let Some(variant) = self.engine_b {
            config.engine_b = variant;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(games) = self.games {
            config.games = games;
        }
        if self.max_plies.is_some() {
            config.max_plies = self.max_plies;
        }
        if let Some(plies) = self.opening_plies {
            config.opening_plies = plies;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.fen.is_some() {
            config.start_fen = self.fen.clone();
        }
        if self.no_alternate {
            config.alternate_colors = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.match_config()?;

    let mut engine_a = ClassicalEngine::new(config.engine_a);
    let mut engine_b = ClassicalEngine::new(config.engine_b);

    let runner = MatchRunner::new(config)?;
    let report = runner.run_match(&mut engine_a, &mut engine_b)?;

    report.print_summary();

    if let Some(path) = &cli.output {
        report
            .save(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
