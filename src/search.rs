//! Exhaustive minimax over the full game tree.
//!
//! No pruning, no transposition cache: with at most nine plies the whole
//! tree is cheap to walk, and recomputing repeated subtrees keeps the
//! evaluators stateless. Recursion depth is bounded by the number of
//! empty squares, so the mutual recursion always bottoms out.

use crate::position::Position;
use crate::rules::utility;
use crate::transition::MoveError;
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// Value of a board when X plays next and plays optimally.
///
/// Terminal boards score via [`utility`]; otherwise the maximum
/// [`min_value`] over all successor boards.
///
/// # Errors
///
/// Propagates [`MoveError`] from move application.
pub fn max_value(board: &Board) -> Result<i8, MoveError> {
    if board.is_terminal() {
        return Ok(utility(board));
    }

    let mut value = i8::MIN;
    for pos in Position::valid_moves(board) {
        value = value.max(min_value(&board.apply(pos)?)?);
    }
    Ok(value)
}

/// Value of a board when O plays next and plays optimally.
///
/// Mirror of [`max_value`]: the minimum [`max_value`] over all successor
/// boards.
///
/// # Errors
///
/// Propagates [`MoveError`] from move application.
pub fn min_value(board: &Board) -> Result<i8, MoveError> {
    if board.is_terminal() {
        return Ok(utility(board));
    }

    let mut value = i8::MAX;
    for pos in Position::valid_moves(board) {
        value = value.min(max_value(&board.apply(pos)?)?);
    }
    Ok(value)
}

/// Returns the optimal move for the side to move, or `None` on a
/// terminal board.
///
/// X picks the move maximizing [`min_value`] of the successor, O the
/// move minimizing [`max_value`]. Ties keep the first candidate in
/// enumeration order, so repeated calls on the same board return the
/// same move.
///
/// # Errors
///
/// Propagates [`MoveError`] from move application.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Result<Option<Position>, MoveError> {
    if board.is_terminal() {
        return Ok(None);
    }

    let moves = Position::valid_moves(board);
    if moves.len() == 9 {
        // Symmetry shortcut on the empty board: every opening is
        // minimax-optimal, so skip the search and take a corner.
        return Ok(Some(Position::TopLeft));
    }

    let player = board.to_move();
    let mut best: Option<(Position, i8)> = None;
    for pos in moves {
        let successor = board.apply(pos)?;
        let value = match player {
            Player::X => min_value(&successor)?,
            Player::O => max_value(&successor)?,
        };
        let improves = match (player, best) {
            (_, None) => true,
            (Player::X, Some((_, so_far))) => value > so_far,
            (Player::O, Some((_, so_far))) => value < so_far,
        };
        if improves {
            best = Some((pos, value));
        }
    }

    debug!(?player, ?best, "searched full game tree");
    Ok(best.map(|(pos, _)| pos))
}
