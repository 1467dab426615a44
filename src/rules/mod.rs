//! Judgments derived from a board: winner, draw, terminality, score.

mod draw;
mod score;
mod win;

pub use draw::is_full;
pub use score::utility;
pub use win::check_winner;

use crate::types::{Board, GameStatus, Player};

impl Board {
    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        is_full(self)
    }

    /// Returns true once the game has concluded: a line is won or no
    /// empty square remains.
    pub fn is_terminal(&self) -> bool {
        check_winner(self).is_some() || is_full(self)
    }

    /// Derives the game status from the squares.
    pub fn status(&self) -> GameStatus {
        match check_winner(self) {
            Some(player) => GameStatus::Won(player),
            None if is_full(self) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_status_in_progress() {
        let board = Board::new();
        assert_eq!(board.status(), GameStatus::InProgress);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_status_won() {
        // X takes the left column.
        let board = Board::from_moves(&[
            Position::TopLeft,    // X
            Position::TopCenter,  // O
            Position::MiddleLeft, // X
            Position::Center,     // O
            Position::BottomLeft, // X
        ])
        .expect("replay of a legal game");

        assert_eq!(board.status(), GameStatus::Won(Player::X));
        assert_eq!(board.status().winner(), Some(Player::X));
        assert!(board.is_terminal());
        assert!(!board.is_full());
    }

    #[test]
    fn test_status_draw() {
        let board = Board::from_moves(&[
            Position::TopLeft,      // X
            Position::TopCenter,    // O
            Position::TopRight,     // X
            Position::MiddleLeft,   // O
            Position::Center,       // X
            Position::BottomLeft,   // O
            Position::MiddleRight,  // X
            Position::BottomRight,  // O
            Position::BottomCenter, // X
        ])
        .expect("replay of a legal game");

        assert!(board.status().is_draw());
        assert!(board.status().is_over());
        assert!(board.is_terminal());
    }
}
