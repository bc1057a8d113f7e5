//! JSON shape of the values handed to the presentation layer.

use serde_json::{json, Value};

use chess_rules::board::BoardCodes;
use chess_rules::{Game, GameSnapshot, IllegalMove, MoveResponse, Square};

#[test]
fn state_serializes_to_grid_of_codes() {
    let value = serde_json::to_value(Game::new().state()).unwrap();
    assert_eq!(value["current_turn"], json!("w"));
    assert_eq!(value["in_check"], json!(false));
    assert_eq!(value["checkmate"], json!(false));
    assert_eq!(
        value["board"][0],
        json!(["bR", "bN", "bB", "bQ", "bK", "bB", "bN", "bR"])
    );
    assert_eq!(value["board"][3], json!(["--", "--", "--", "--", "--", "--", "--", "--"]));
    assert_eq!(value["board"][6][4], json!("wP"));
}

#[test]
fn successful_move_response() {
    let mut game = Game::new();
    let response = MoveResponse::from(game.submit_move(Square(6, 4), Square(4, 4)));
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["success"], json!(true));
    assert_eq!(value["current_turn"], json!("b"));
    assert_eq!(value["message"], json!("Move successful"));
    assert_eq!(value["board"][4][4], json!("wP"));
    assert_eq!(value["board"][6][4], json!("--"));
}

#[test]
fn failed_move_response_has_only_success_and_message() {
    let response = MoveResponse::from(Err(IllegalMove::KingExposedToCheck));
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value,
        json!({"success": false, "message": "Move would put/leave king in check"})
    );
}

#[test]
fn snapshot_round_trips_through_json() {
    let snapshot = Game::new().state();
    let text = serde_json::to_string(&snapshot).unwrap();
    let back: GameSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn client_grid_decodes() {
    let value: Value = serde_json::to_value(Game::new().state()).unwrap();
    let rows: Vec<Vec<String>> = serde_json::from_value(value["board"].clone()).unwrap();
    let codes = BoardCodes::from_rows(&rows).unwrap();
    assert_eq!(codes, Game::new().state().board);
}
