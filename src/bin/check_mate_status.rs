use std::env;
use std::process::ExitCode;

use chess_rules::board::{BoardCodes, Square};
use chess_rules::Game;

fn parse_move(text: &str) -> Option<(Square, Square)> {
    let (from, to) = text.split_once('-')?;
    Some((from.parse().ok()?, to.parse().ok()?))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <row,col-row,col> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Game::new();
    for text in args.iter().skip(1) {
        let Some((from, to)) = parse_move(text) else {
            eprintln!("cannot parse move '{text}', expected e.g. 6,4-4,4");
            return ExitCode::FAILURE;
        };
        if let Err(reason) = game.submit_move(from, to) {
            eprintln!("{text}: {reason}");
            return ExitCode::FAILURE;
        }
    }

    let state = game.state();
    let legal_moves = game.legal_moves();
    println!("side_to_move: {}", state.current_turn);
    println!("in_check: {}", state.in_check);
    println!("checkmate: {}", state.checkmate);
    println!("legal_moves: {}", legal_moves.len());
    for (from, to) in &legal_moves {
        println!("{},{}-{},{}", from.row(), from.col(), to.row(), to.col());
    }
    let BoardCodes(rows) = state.board;
    for row in rows {
        println!("{}", row.join(" "));
    }
    ExitCode::SUCCESS
}
