//! Pure move application: boards in, boards out.

use crate::position::Position;
use crate::types::{Board, Square};
use tracing::instrument;

/// Error raised when an operation receives a move that violates its
/// precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target square already holds a mark.
    #[display("illegal move: {_0} is already occupied")]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

impl Board {
    /// Plays the side to move at `pos`, returning the successor board.
    ///
    /// The receiver is cloned and left untouched, so a caller can apply
    /// every candidate move against the same board. Which mark gets
    /// written is derived from the board itself via
    /// [`Board::to_move`](crate::Board::to_move).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if `pos` is not an empty
    /// square.
    #[instrument(skip(self))]
    pub fn apply(&self, pos: Position) -> Result<Board, MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mut next = self.clone();
        next.set(pos, Square::Occupied(self.to_move()));
        Ok(next)
    }

    /// Replays a move sequence from the empty board.
    ///
    /// Marks alternate implicitly, X first, because each step derives the
    /// mover from the board it extends.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] on the first move that
    /// targets an occupied square.
    #[instrument]
    pub fn from_moves(moves: &[Position]) -> Result<Board, MoveError> {
        moves
            .iter()
            .try_fold(Board::new(), |board, &pos| board.apply(pos))
    }
}
