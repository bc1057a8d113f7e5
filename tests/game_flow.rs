use chess_rules::board::{BoardCodes, CastlingRights, Color, Piece, PositionBuilder, Square};
use chess_rules::{Game, IllegalMove, MoveResponse, Outcome, SharedGame};

fn submit(game: &mut Game, from: (usize, usize), to: (usize, usize)) -> Outcome {
    game.submit_move(Square(from.0, from.1), Square(to.0, to.1))
        .unwrap_or_else(|e| panic!("{from:?} -> {to:?} rejected: {e}"))
        .outcome
}

#[test]
fn fools_mate_through_game_api() {
    let mut game = Game::new();
    assert_eq!(submit(&mut game, (6, 5), (5, 5)), Outcome::Moved);
    assert!(!game.state().checkmate);
    assert_eq!(submit(&mut game, (1, 4), (3, 4)), Outcome::Moved);
    assert!(!game.state().checkmate);
    assert_eq!(submit(&mut game, (6, 6), (4, 6)), Outcome::Moved);
    assert!(!game.state().checkmate);
    assert_eq!(submit(&mut game, (0, 3), (4, 7)), Outcome::Checkmate);

    let state = game.state();
    assert_eq!(state.current_turn, Color::White);
    assert!(state.in_check);
    assert!(state.checkmate);
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.history().len(), 4);
}

#[test]
fn check_is_reported() {
    let mut game = Game::new();
    submit(&mut game, (6, 4), (4, 4));
    submit(&mut game, (1, 5), (2, 5));
    let outcome = submit(&mut game, (7, 3), (3, 7));
    assert_eq!(outcome, Outcome::Check);
    assert!(game.state().in_check);
    assert!(!game.state().checkmate);
}

#[test]
fn scholars_mate() {
    let mut game = Game::new();
    submit(&mut game, (6, 4), (4, 4));
    submit(&mut game, (1, 4), (3, 4));
    submit(&mut game, (7, 5), (4, 2));
    submit(&mut game, (0, 1), (2, 2));
    submit(&mut game, (7, 3), (3, 7));
    submit(&mut game, (0, 6), (2, 5));
    assert_eq!(submit(&mut game, (3, 7), (1, 5)), Outcome::Checkmate);
    assert!(game.is_checkmate(Color::Black));
}

#[test]
fn rejection_reasons_follow_check_order() {
    let game = Game::new();
    let cases = [
        ((4, 4), (3, 4), IllegalMove::NotYourTurn),
        ((4, 4), (3, 9), IllegalMove::NotYourTurn),
        ((1, 4), (3, 4), IllegalMove::NotYourTurn),
        ((6, 4), (6, 9), IllegalMove::OutOfBounds),
        ((7, 2), (6, 3), IllegalMove::OwnPieceCapture),
        ((7, 2), (5, 2), IllegalMove::IllegalShape),
    ];
    for (from, to, reason) in cases {
        assert_eq!(
            game.validate(Square(from.0, from.1), Square(to.0, to.1)),
            Err(reason),
            "{from:?} -> {to:?}"
        );
    }
}

#[test]
fn failure_response_carries_reason_only() {
    let mut game = Game::new();
    let response = MoveResponse::from(game.submit_move(Square(7, 0), Square(5, 0)));
    assert!(!response.success);
    assert_eq!(response.message, "Invalid move for this piece");
    assert_eq!(response.board, None);
    assert_eq!(response.current_turn, None);
}

#[test]
fn game_from_wire_grid() {
    let mut rows = vec![vec!["--"; 8]; 8];
    rows[0][4] = "bK";
    rows[0][7] = "bR";
    rows[7][4] = "wK";
    rows[1][0] = "wP";
    let codes = BoardCodes::from_rows(&rows).unwrap();
    let position = PositionBuilder::from_codes(&codes)
        .unwrap()
        .castling(CastlingRights::none())
        .castle_kingside(Color::Black)
        .build()
        .unwrap();

    let mut game = Game::from_position(position);
    submit(&mut game, (1, 0), (0, 0));
    assert_eq!(game.state().board.0[0][0], "wQ");
    assert!(game.state().in_check);
    assert_eq!(
        game.validate(Square(0, 4), Square(0, 6)),
        Err(IllegalMove::IllegalShape)
    );
    assert!(game.legal_destinations(Square(0, 4)).contains(&Square(1, 4)));
    assert_eq!(game.position().board().piece_on(Square(0, 0)), Some(Piece::Queen));
}

#[test]
fn shared_game_serializes_callers() {
    let shared = SharedGame::new(Game::new());
    let handle = {
        let shared = shared.clone();
        std::thread::spawn(move || shared.submit_move(Square(6, 3), Square(4, 3)))
    };
    handle.join().unwrap().unwrap();
    assert_eq!(shared.state().current_turn, Color::Black);
    assert_eq!(
        shared.submit_move(Square(6, 4), Square(4, 4)),
        Err(IllegalMove::NotYourTurn)
    );
}
