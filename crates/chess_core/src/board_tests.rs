use super::*;

#[test]
fn startpos_has_twenty_moves() {
    let pos = Position::startpos();
    assert_eq!(pos.legal_moves().len(), 20);
    assert_eq!(pos.side_to_move(), Color::White);
}

#[test]
fn legal_move_order_is_stable() {
    let pos = Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
        .unwrap();
    assert_eq!(pos.legal_moves(), pos.legal_moves());
}

#[test]
fn push_pop_restores_position() {
    let mut pos = Position::startpos();
    let fen = pos.fen();
    let hash = pos.hash();

    let first = pos.legal_moves()[0];
    pos.push(first);
    let reply = pos.legal_moves()[0];
    pos.push(reply);
    assert_eq!(pos.ply(), 2);
    assert_eq!(pos.side_to_move(), Color::White);

    assert_eq!(pos.pop(), Some(reply));
    assert_eq!(pos.pop(), Some(first));
    assert_eq!(pos.pop(), None);
    assert_eq!(pos.fen(), fen);
    assert_eq!(pos.hash(), hash);
    assert_eq!(pos.ply(), 0);
}

#[test]
fn try_push_rejects_illegal_move() {
    let mut pos = Position::startpos();
    let mv: Move = "e2e5".parse().unwrap();
    assert!(matches!(
        pos.try_push(mv),
        Err(ChessError::IllegalMove { .. })
    ));
    assert_eq!(pos.ply(), 0);
}

#[test]
fn piece_at_reports_kind_and_colour() {
    let pos = Position::startpos();
    assert_eq!(pos.piece_at(Square::E1), Some((Piece::King, Color::White)));
    assert_eq!(pos.piece_at(Square::D8), Some((Piece::Queen, Color::Black)));
    assert_eq!(pos.piece_at(Square::E4), None);
}

#[test]
fn invalid_fen_is_rejected() {
    assert!(matches!(
        Position::from_fen("not a fen"),
        Err(ChessError::InvalidFen { .. })
    ));
}

#[test]
fn capture_resets_halfmove_clock() {
    let mut pos = Position::from_fen("4k3/8/8/3p4/8/8/8/3RK3 w - - 40 60").unwrap();
    let capture: Move = "d1d5".parse().unwrap();
    pos.try_push(capture).unwrap();
    assert_eq!(pos.halfmove_clock(), 0);

    let quiet: Move = "e8e7".parse().unwrap();
    pos.try_push(quiet).unwrap();
    assert_eq!(pos.halfmove_clock(), 1);
}

#[test]
fn fen_keeps_clock_beyond_library_cap() {
    let fen = "4k3/8/8/8/8/8/8/3RK3 w - - 120 80";
    let pos = Position::from_fen(fen).unwrap();
    assert_eq!(pos.halfmove_clock(), 120);
    assert_eq!(pos.fen(), fen);

    let reloaded = Position::from_fen(&pos.fen()).unwrap();
    assert_eq!(reloaded.halfmove_clock(), 120);
}
