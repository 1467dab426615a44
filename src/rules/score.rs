//! Terminal scoring for minimax.

use super::win::check_winner;
use crate::types::{Board, Player};

/// Numeric outcome of a board from X's perspective.
///
/// +1 when X has won, -1 when O has won, 0 otherwise. The zero covers
/// both draws and boards still in progress; the value is only meaningful
/// once [`Board::is_terminal`](crate::Board::is_terminal) holds.
pub fn utility(board: &Board) -> i8 {
    match check_winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
