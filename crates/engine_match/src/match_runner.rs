//! Match runner for playing games between engines

use std::time::Instant;

use chess_core::{move_to_uci, Color, Engine, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::results::{GameEnd, GameRecord, MatchReport, MoveRecord, Side};

/// Position the engines take over from, with the random plies that led
/// there from the configured start.
#[derive(Debug, Clone)]
pub struct Opening {
    pub start_fen: String,
    pub position: Position,
    pub moves: Vec<String>,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Plays `opening_plies` uniformly random legal moves from the start
    /// position, stopping early if the game ends.
    pub fn random_opening(&self, rng: &mut StdRng) -> Result<Opening, MatchError> {
        let mut position = self.config.start_position()?;
        let start_fen = position.fen();
        let mut moves = Vec::new();

        for _ in 0..self.config.opening_plies {
            if position.is_game_over() {
                break;
            }
            let legal = position.legal_moves();
            let Some(&mv) = legal.choose(rng) else {
                break;
            };
            moves.push(move_to_uci(position.board(), mv));
            position.push(mv);
        }

        if !moves.is_empty() {
            debug!(opening = %moves.join(" "), "random opening");
        }
        Ok(Opening {
            start_fen,
            position,
            moves,
        })
    }

    /// Play one game from the configured start position
    pub fn play_game(
        &self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Result<GameRecord, MatchError> {
        let position = self.config.start_position()?;
        let opening = Opening {
            start_fen: position.fen(),
            position,
            moves: Vec::new(),
        };
        self.play_from(&opening, white, black)
    }

    /// Play one game from `opening` until it ends or reaches `max_plies`.
    ///
    /// The returned record has `engine_a_white` set; callers playing with
    /// engine A as Black flip it.
    pub fn play_from(
        &self,
        opening: &Opening,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Result<GameRecord, MatchError> {
        let mut pos = opening.position.clone();
        white.new_game();
        black.new_game();

        let mut moves = Vec::new();
        let (termination, winner) = loop {
            if let Some(outcome) = pos.outcome() {
                break (GameEnd::from(outcome.termination), outcome.winner);
            }
            if let Some(limit) = self.config.max_plies {
                if moves.len() as u32 >= limit {
                    break (GameEnd::MoveLimit, None);
                }
            }

            let side = pos.side_to_move();
            let engine: &mut dyn Engine = match side {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };

            let started = Instant::now();
            let result = engine.search(&pos, self.config.depth);
            let elapsed_secs = started.elapsed().as_secs_f64();

            let mv = result.best_move.ok_or_else(|| MatchError::NoMove {
                engine: engine.name().to_string(),
                fen: pos.fen(),
            })?;
            let uci = move_to_uci(pos.board(), mv);
            pos.try_push(mv)?;

            let ply = moves.len() as u32 + 1;
            info!(
                ply,
                engine = engine.name(),
                mv = %uci,
                score = result.score,
                nodes = result.nodes,
                secs = elapsed_secs,
                "move played"
            );
            moves.push(MoveRecord {
                ply,
                side: side.into(),
                uci,
                elapsed_secs,
                score: result.score,
                nodes: result.nodes,
            });
        };

        let result = match winner {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        };
        info!(result, ?termination, plies = moves.len(), "game over");

        Ok(GameRecord {
            engine_a_white: true,
            white: white.name().to_string(),
            black: black.name().to_string(),
            start_fen: opening.start_fen.clone(),
            opening: opening.moves.clone(),
            moves,
            result: result.to_string(),
            winner: winner.map(Side::from),
            termination,
        })
    }

    /// Run a match between two engines
    ///
    /// With `alternate_colors`, engine A takes Black in every second game and
    /// each pair of games shares one random opening.
    pub fn run_match(
        &self,
        engine_a: &mut dyn Engine,
        engine_b: &mut dyn Engine,
    ) -> Result<MatchReport, MatchError> {
        let mut report = MatchReport::new(self.config.clone(), engine_a.name(), engine_b.name());
        let mut rng = self.rng();
        let mut opening = self.random_opening(&mut rng)?;

        for game_num in 0..self.config.games {
            let engine_a_white = !self.config.alternate_colors || game_num % 2 == 0;
            if game_num > 0 && engine_a_white {
                opening = self.random_opening(&mut rng)?;
            }

            let game = if engine_a_white {
                self.play_from(&opening, engine_a, engine_b)?
            } else {
                let mut game = self.play_from(&opening, engine_b, engine_a)?;
                game.engine_a_white = false;
                game
            };

            info!(
                game = game_num + 1,
                of = self.config.games,
                white = %game.white,
                black = %game.black,
                result = %game.result,
                "game finished"
            );
            report.add_game(game);
        }

        Ok(report)
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
