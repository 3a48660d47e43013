use super::*;
use chess_core::Move;
use classical_engine::{ClassicalEngine, EvalVariant, MATE_SCORE};

const BACK_RANK_WHITE: &str = "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1";
const STALEMATE: &str = "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1";

fn config(depth: u8, games: u32, max_plies: Option<u32>) -> MatchConfig {
    MatchConfig {
        depth,
        games,
        max_plies,
        ..Default::default()
    }
}

/// Always plays the first legal move, or nothing when `silent`.
struct FirstMove {
    silent: bool,
}

impl Engine for FirstMove {
    fn search(&mut self, pos: &Position, depth: u8) -> chess_core::SearchResult {
        let best_move: Option<Move> = if self.silent {
            None
        } else {
            pos.legal_moves().first().copied()
        };
        chess_core::SearchResult {
            best_move,
            score: 0,
            depth,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "first-move"
    }
}

#[test]
fn test_self_play() {
    let mut engine_a = ClassicalEngine::new(EvalVariant::Material);
    let mut engine_b = ClassicalEngine::new(EvalVariant::PieceSquare);

    let runner = MatchRunner::new(config(1, 2, Some(20))).unwrap();
    let report = runner.run_match(&mut engine_a, &mut engine_b).unwrap();

    assert_eq!(report.result.total_games(), 2);
    assert_eq!(report.games.len(), 2);
    assert!(report.games[0].engine_a_white);
    assert!(!report.games[1].engine_a_white);
    assert_eq!(report.games[1].white, "Classical (pst)");
    for game in &report.games {
        assert!(game.moves.len() <= 20);
        assert_eq!(game.moves.first().map(|m| m.side), Some(Side::White));
    }
    assert_eq!(
        (report.engine_a.moves + report.engine_b.moves) as usize,
        report.total_moves()
    );
}

#[test]
fn mate_in_one_is_played_and_scored() {
    let mut cfg = config(2, 1, None);
    cfg.start_fen = Some(BACK_RANK_WHITE.to_string());
    let runner = MatchRunner::new(cfg).unwrap();

    let mut white = ClassicalEngine::new(EvalVariant::Material);
    let mut black = ClassicalEngine::new(EvalVariant::Material);
    let game = runner.play_game(&mut white, &mut black).unwrap();

    assert_eq!(game.result, "1-0");
    assert_eq!(game.winner, Some(Side::White));
    assert_eq!(game.termination, GameEnd::Checkmate);
    assert_eq!(game.moves.len(), 1);
    assert_eq!(game.moves[0].uci, "e1e8");
    assert_eq!(game.moves[0].score, MATE_SCORE);
    assert!(game.moves[0].elapsed_secs >= 0.0);
}

#[test]
fn finished_start_position_plays_no_moves() {
    let mut cfg = config(3, 1, None);
    cfg.start_fen = Some(STALEMATE.to_string());
    let runner = MatchRunner::new(cfg).unwrap();

    let mut a = ClassicalEngine::default();
    let mut b = ClassicalEngine::default();
    let report = runner.run_match(&mut a, &mut b).unwrap();

    let game = &report.games[0];
    assert!(game.moves.is_empty());
    assert_eq!(game.result, "1/2-1/2");
    assert_eq!(game.termination, GameEnd::Stalemate);
    assert_eq!(report.result.draws, 1);
    assert_eq!(report.engine_a.average_secs(), 0.0);
}

#[test]
fn move_limit_adjudicates_a_draw() {
    let runner = MatchRunner::new(config(1, 1, Some(6))).unwrap();
    let mut white = FirstMove { silent: false };
    let mut black = FirstMove { silent: false };

    let game = runner.play_game(&mut white, &mut black).unwrap();

    assert_eq!(game.moves.len(), 6);
    assert_eq!(game.termination, GameEnd::MoveLimit);
    assert_eq!(game.winner, None);
    let plies: Vec<u32> = game.moves.iter().map(|m| m.ply).collect();
    assert_eq!(plies, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn engine_without_a_move_is_an_error() {
    let runner = MatchRunner::new(config(1, 1, Some(4))).unwrap();
    let mut white = FirstMove { silent: true };
    let mut black = FirstMove { silent: false };

    let err = runner.play_game(&mut white, &mut black).unwrap_err();
    assert!(matches!(err, MatchError::NoMove { ref engine, .. } if engine == "first-move"));
}

#[test]
fn depth_zero_is_rejected() {
    assert!(matches!(
        MatchRunner::new(config(0, 1, None)),
        Err(MatchError::InvalidConfig(_))
    ));
    assert!(MatchRunner::new(config(1, 0, None)).is_err());
}

#[test]
fn seeded_openings_are_reproducible() {
    let mut cfg = config(1, 1, None);
    cfg.opening_plies = 6;
    cfg.seed = Some(7);
    let runner = MatchRunner::new(cfg).unwrap();

    let first = runner.random_opening(&mut runner.rng()).unwrap();
    let second = runner.random_opening(&mut runner.rng()).unwrap();

    assert_eq!(first.moves.len(), 6);
    assert_eq!(first.moves, second.moves);
    assert_eq!(first.position.fen(), second.position.fen());
    assert_eq!(first.position.ply(), 6);
}

#[test]
fn paired_games_share_an_opening() {
    let mut cfg = config(1, 2, Some(2));
    cfg.opening_plies = 4;
    cfg.seed = Some(42);
    let runner = MatchRunner::new(cfg).unwrap();

    let mut a = FirstMove { silent: false };
    let mut b = FirstMove { silent: false };
    let report = runner.run_match(&mut a, &mut b).unwrap();

    assert_eq!(report.games[0].opening.len(), 4);
    assert_eq!(report.games[0].opening, report.games[1].opening);
}
