//! Engine-level tests through the shared `Engine` trait.

use chess_core::{Engine, Position};
use classical_engine::{ClassicalEngine, EvalVariant, MATE_SCORE};

#[test]
fn both_variants_return_legal_moves_and_leave_the_position_alone() {
    let pos = Position::from_fen(
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    )
    .unwrap();
    let fen = pos.fen();

    for variant in [EvalVariant::Material, EvalVariant::PieceSquare] {
        let mut engine = ClassicalEngine::new(variant);
        let result = engine.search(&pos, 2);

        let mv = result.best_move.expect("a move");
        assert!(pos.legal_moves().contains(&mv));
        assert_eq!(result.depth, 2);
        assert!(result.nodes > 0);
        assert_eq!(pos.fen(), fen);
        assert_eq!(pos.ply(), 0);
    }
}

#[test]
fn engine_names_reflect_the_variant() {
    assert_eq!(
        ClassicalEngine::new(EvalVariant::Material).name(),
        "Classical (material)"
    );
    assert_eq!(ClassicalEngine::default().name(), "Classical (pst)");
    assert_eq!(
        ClassicalEngine::default().variant(),
        EvalVariant::PieceSquare
    );
}

#[test]
fn reports_mate_score_from_whites_side() {
    let pos = Position::from_fen("4q1k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
    let result = ClassicalEngine::default().search(&pos, 1);
    assert_eq!(result.score, -MATE_SCORE);
}

#[test]
fn mated_position_has_no_move() {
    let pos = Position::from_fen(
        "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
    )
    .unwrap();
    let result = ClassicalEngine::default().search(&pos, 3);
    assert!(result.best_move.is_none());
    assert_eq!(result.score, MATE_SCORE);
}

#[test]
fn searching_inside_a_game_sees_its_history() {
    // Shuffle knights back to the start four times; the fifth return would
    // end the game, so the copy handed to the engine must carry the history.
    let mut pos = Position::startpos();
    for _ in 0..4 {
        for txt in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            let mv = chess_core::parse_uci_move(&pos, txt).unwrap();
            pos.push(mv);
        }
    }
    assert!(pos.is_fivefold_repetition());
    let result = ClassicalEngine::new(EvalVariant::Material).search(&pos, 2);
    assert!(result.best_move.is_none());
}
