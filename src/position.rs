//! Positions on the board and legal-move enumeration.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Positions double as moves: a move is nothing more than the empty
/// square the side to move claims. Values are transient, produced by
/// enumeration and consumed by [`Board::apply`](crate::Board::apply).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left, row 0 column 0.
    TopLeft,
    /// Top-center, row 0 column 1.
    TopCenter,
    /// Top-right, row 0 column 2.
    TopRight,
    /// Middle-left, row 1 column 0.
    MiddleLeft,
    /// Center, row 1 column 1.
    Center,
    /// Middle-right, row 1 column 2.
    MiddleRight,
    /// Bottom-left, row 2 column 0.
    BottomLeft,
    /// Bottom-center, row 2 column 1.
    BottomCenter,
    /// Bottom-right, row 2 column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8, row-major).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().nth(index)
    }

    /// Creates position from (row, column) coordinates.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= 3 || col >= 3 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Returns the legal moves on a board: every empty position.
    ///
    /// Membership is what matters to callers; the row-major order exists
    /// only so that enumeration is deterministic.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|&pos| board.is_empty(pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
