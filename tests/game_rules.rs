use chessapp::board::{Board, Piece, BOARD_SIZE};
use chessapp::game::Game;

fn game(fen: &str) -> Game {
    Game::from_fen(fen).expect("valid FEN")
}

fn assert_rejected(g: &mut Game, sr: usize, sc: usize, tr: usize, tc: usize) {
    let before = g.board().clone();
    let side = g.white_to_move();
    let len = g.history().len();
    assert!(!g.try_make_move(sr, sc, tr, tc), "move {sr},{sc} -> {tr},{tc} should fail");
    assert_eq!(g.board(), &before, "board changed by rejected move");
    assert_eq!(g.white_to_move(), side);
    assert_eq!(g.history().len(), len);
}

#[test]
fn initial_position() {
    let g = Game::new();
    let back = [
        (Piece::WhiteRook, Piece::BlackRook),
        (Piece::WhiteKnight, Piece::BlackKnight),
        (Piece::WhiteBishop, Piece::BlackBishop),
        (Piece::WhiteQueen, Piece::BlackQueen),
        (Piece::WhiteKing, Piece::BlackKing),
        (Piece::WhiteBishop, Piece::BlackBishop),
        (Piece::WhiteKnight, Piece::BlackKnight),
        (Piece::WhiteRook, Piece::BlackRook),
    ];
    for c in 0..BOARD_SIZE {
        assert_eq!(g.piece_at(7, c), back[c].0);
        assert_eq!(g.piece_at(0, c), back[c].1);
        assert_eq!(g.piece_at(6, c), Piece::WhitePawn);
        assert_eq!(g.piece_at(1, c), Piece::BlackPawn);
        for r in 2..6 {
            assert_eq!(g.piece_at(r, c), Piece::Empty);
        }
    }
    assert!(g.white_to_move());
    assert!(g.history().is_empty());
    assert_eq!(g.last_move_notation(), "");
}

#[test]
fn king_pawn_advance_and_undo() {
    let mut g = Game::new();

    assert!(g.try_make_move(6, 4, 4, 4));
    assert_eq!(g.piece_at(6, 4), Piece::Empty);
    assert_eq!(g.piece_at(4, 4), Piece::WhitePawn);
    assert!(!g.white_to_move());
    assert_eq!(g.last_move_notation(), "e2-e4");

    // source is empty now
    assert_rejected(&mut g, 6, 4, 4, 4);

    g.undo();
    assert_eq!(g.piece_at(6, 4), Piece::WhitePawn);
    assert_eq!(g.piece_at(4, 4), Piece::Empty);
    assert!(g.white_to_move());
    assert_eq!(g.board(), &Board::start_position());
}

#[test]
fn rook_cannot_jump_over_own_pawn() {
    let mut g = Game::new();
    assert_rejected(&mut g, 7, 0, 0, 0);
}

#[test]
fn wrong_side_and_empty_source_are_rejected() {
    let mut g = Game::new();
    assert_rejected(&mut g, 1, 4, 3, 4);
    assert_rejected(&mut g, 4, 4, 3, 4);
    assert!(g.try_make_move(6, 3, 4, 3));
    assert_rejected(&mut g, 6, 4, 4, 4);
}

#[test]
fn no_self_capture() {
    let mut g = Game::new();
    // queen onto own pawn, knight onto own pawn, king onto own queen
    assert_rejected(&mut g, 7, 3, 6, 3);
    assert_rejected(&mut g, 7, 1, 6, 3);
    assert_rejected(&mut g, 7, 4, 7, 3);

    let mut g = game("4k3/8/8/8/8/8/8/R2RK3 w");
    assert_rejected(&mut g, 7, 0, 7, 3);
}

#[test]
fn pawn_double_step_blocking() {
    // blocked on the intermediate square (e3) by a black knight
    let mut g = game("4k3/8/8/8/8/4n3/4P3/4K3 w");
    assert_rejected(&mut g, 6, 4, 4, 4);

    // blocked on the destination (e4) by a white knight
    let mut g = game("4k3/8/8/8/4N3/8/4P3/4K3 w");
    assert_rejected(&mut g, 6, 4, 4, 4);
    assert!(g.try_make_move(6, 4, 5, 4));

    // black pawn blocked on e6
    let mut g = game("4k3/4p3/4P3/8/8/8/8/4K3 b");
    assert_rejected(&mut g, 1, 4, 3, 4);
    assert_rejected(&mut g, 1, 4, 2, 4);
}

#[test]
fn sliders_are_blocked_by_either_color() {
    for blocker in ['p', 'P'] {
        // rook a1 up the a-file, blocker on a4
        let fen = format!("k7/8/8/8/{}7/8/8/R3K3 w", blocker);
        let mut g = game(&fen);
        assert_rejected(&mut g, 7, 0, 0, 0);
        assert!(g.try_make_move(7, 0, 5, 0));

        // bishop c1 toward h6, blocker on e3
        let fen = format!("k7/8/8/8/8/4{}3/8/2B1K3 w", blocker);
        let mut g = game(&fen);
        assert_rejected(&mut g, 7, 2, 2, 7);

        // queen d1 toward d8, blocker on d5
        let fen = format!("k7/8/8/3{}4/8/8/8/3QK3 w", blocker);
        let mut g = game(&fen);
        assert_rejected(&mut g, 7, 3, 0, 3);
    }
}

#[test]
fn captures_record_and_restore_the_victim() {
    // 1. e4 d5 2. exd5
    let mut g = Game::new();
    assert!(g.try_make_move(6, 4, 4, 4));
    assert!(g.try_make_move(1, 3, 3, 3));
    assert!(g.try_make_move(4, 4, 3, 3));
    assert_eq!(g.last_move_notation(), "e4-d5");

    let mv = *g.history().last().unwrap();
    assert_eq!(mv.moved_piece, Piece::WhitePawn);
    assert_eq!(mv.captured_piece, Piece::BlackPawn);
    assert!(mv.is_capture());
    assert_eq!(g.board().count(Piece::BlackPawn), 7);

    g.undo();
    assert_eq!(g.piece_at(3, 3), Piece::BlackPawn);
    assert_eq!(g.piece_at(4, 4), Piece::WhitePawn);
    assert!(g.white_to_move());
    // notation still names the move that was taken back
    assert_eq!(g.last_move_notation(), "e4-d5");
}

#[test]
fn king_may_walk_into_check() {
    // no check detection: Ke1-e2 onto the rook's open file is accepted
    let mut g = game("4r2k/8/8/8/8/8/8/4K3 w");
    assert!(g.try_make_move(7, 4, 6, 4));
    // and black may capture the king
    assert!(g.try_make_move(0, 4, 6, 4));
    assert_eq!(g.board().count(Piece::WhiteKing), 0);
}

#[test]
fn turns_alternate() {
    let mut g = Game::new();
    let line = [
        (6, 4, 4, 4),
        (1, 4, 3, 4),
        (7, 6, 5, 5),
        (0, 1, 2, 2),
        (7, 5, 4, 2),
        (0, 6, 2, 5),
    ];
    let mut white = true;
    for (sr, sc, tr, tc) in line {
        assert_eq!(g.white_to_move(), white);
        assert!(g.try_make_move(sr, sc, tr, tc));
        white = !white;
    }
    assert_eq!(g.white_to_move(), white);
    assert_eq!(
        g.move_list(),
        vec!["e2-e4", "e7-e5", "g1-f3", "b8-c6", "f1-c4", "g8-f6"]
    );
}

#[test]
fn undo_on_empty_history_is_a_no_op() {
    let mut g = Game::new();
    g.undo();
    assert_eq!(g.board(), &Board::start_position());
    assert!(g.white_to_move());

    assert!(g.try_make_move(7, 6, 5, 5));
    g.undo();
    g.undo();
    assert_eq!(g.board(), &Board::start_position());
    assert!(g.white_to_move());
}

#[test]
fn undo_walks_back_one_ply_at_a_time() {
    let mut g = Game::new();
    let mut snapshots = vec![(g.board().clone(), g.white_to_move())];
    for (sr, sc, tr, tc) in [(6, 3, 4, 3), (1, 4, 3, 4), (4, 3, 3, 4), (0, 3, 3, 6)] {
        assert!(g.try_make_move(sr, sc, tr, tc));
        snapshots.push((g.board().clone(), g.white_to_move()));
    }
    snapshots.pop();
    while let Some((board, side)) = snapshots.pop() {
        g.undo();
        assert_eq!(g.board(), &board);
        assert_eq!(g.white_to_move(), side);
    }
    assert!(g.history().is_empty());
}

#[test]
fn make_then_undo_restores_every_position() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w",
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b",
        "4k3/1P6/8/3pP3/8/8/6p1/4K3 w",
    ];
    for fen in fens {
        let mut g = game(fen);
        let board = g.board().clone();
        let side = g.white_to_move();
        let moves = g.generate_moves();
        assert!(!moves.is_empty());
        for mv in moves {
            assert!(
                g.try_make_move(mv.from_row, mv.from_col, mv.to_row, mv.to_col),
                "generated move {} rejected in {}",
                mv,
                fen
            );
            assert_eq!(g.history().last(), Some(&mv));
            g.undo();
            assert_eq!(g.board(), &board, "{} did not undo cleanly", mv);
            assert_eq!(g.white_to_move(), side);
        }
    }
}

#[test]
fn no_promotion_and_no_en_passant() {
    // white pawn reaches the last rank and stays a pawn
    let mut g = game("4k3/1P6/8/8/8/8/8/4K3 w");
    assert!(g.try_make_move(1, 1, 0, 1));
    assert_eq!(g.piece_at(0, 1), Piece::WhitePawn);

    // after ...d7-d5 the e5 pawn cannot take en passant on d6
    let mut g = game("4k3/3p4/8/4P3/8/8/8/4K3 b");
    assert!(g.try_make_move(1, 3, 3, 3));
    assert_rejected(&mut g, 3, 4, 2, 3);
}

#[test]
fn can_select_only_own_pieces() {
    let mut g = Game::new();
    assert!(g.can_select(6, 0));
    assert!(!g.can_select(1, 0));
    assert!(!g.can_select(4, 4));
    assert!(g.try_make_move(6, 0, 5, 0));
    assert!(g.can_select(1, 0));
    assert!(!g.can_select(5, 0));
}
