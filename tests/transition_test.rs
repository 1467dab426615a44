//! Tests for turn derivation and move application.

use tictactoe_minimax::{Board, GameStatus, MoveError, Player, Position, Square};

#[test]
fn test_x_moves_first() {
    assert_eq!(Board::new().to_move(), Player::X);
}

#[test]
fn test_turn_tracks_mark_counts() {
    let mut board = Board::new();
    let moves = [
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
    ];

    for (ply, pos) in moves.iter().enumerate() {
        let expected = if ply % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(board.to_move(), expected);
        assert_eq!(board.count(Player::X) == board.count(Player::O), expected == Player::X);
        board = board.apply(*pos).expect("empty square");
    }
}

#[test]
fn test_apply_is_pure() {
    let board = Board::new()
        .apply(Position::Center)
        .and_then(|b| b.apply(Position::TopLeft))
        .expect("legal opening");
    let snapshot = board.clone();

    // Fan out several successors from the same board.
    let after_tr = board.apply(Position::TopRight).expect("empty square");
    let after_bl = board.apply(Position::BottomLeft).expect("empty square");

    assert_eq!(board, snapshot);
    assert_ne!(after_tr, after_bl);
    assert_eq!(after_tr.get(Position::TopRight), Square::Occupied(Player::X));
    assert_eq!(after_bl.get(Position::BottomLeft), Square::Occupied(Player::X));
}

#[test]
fn test_apply_rejects_occupied_square() {
    let board = Board::new().apply(Position::Center).expect("empty square");

    assert_eq!(
        board.apply(Position::Center),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    // The failed application changed nothing.
    assert_eq!(board.count(Player::X), 1);
    assert_eq!(board.count(Player::O), 0);
}

#[test]
fn test_move_error_displays_position() {
    let err = MoveError::SquareOccupied(Position::Center);
    assert_eq!(err.to_string(), "illegal move: Center is already occupied");
}

#[test]
fn test_from_moves_reaches_won_status() {
    let board = Board::from_moves(&[
        Position::TopLeft,    // X
        Position::Center,     // O
        Position::TopCenter,  // X
        Position::BottomLeft, // O
        Position::TopRight,   // X wins top row
    ])
    .expect("replay of a legal game");

    assert_eq!(board.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_board_serde_round_trip() {
    let board = Board::from_moves(&[
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
    ])
    .expect("replay of a legal game");

    let json = serde_json::to_string(&board).expect("board serializes");
    let restored: Board = serde_json::from_str(&json).expect("board deserializes");

    assert_eq!(restored, board);
    assert_eq!(restored.to_move(), board.to_move());
}
