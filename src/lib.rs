//! Optimal tic-tac-toe play via exhaustive game-tree search.
//!
//! Boards are plain values: every transition clones its input and hands
//! back a successor, so callers and search branches never share state.
//! Nothing derivable is stored; the side to move falls out of the mark
//! counts and the game status out of a line scan.
//!
//! # Architecture
//!
//! - **Types**: players, squares, the 3x3 board, derived game status
//! - **Rules**: winner and draw detection, terminal scoring
//! - **Transition**: checked move application producing successor boards
//! - **Search**: full minimax with no pruning and no caching
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{best_move, Board, Position};
//!
//! # fn main() -> Result<(), tictactoe_minimax::MoveError> {
//! let board = Board::new().apply(Position::Center)?;
//! let reply = best_move(&board)?.expect("game has just begun");
//! let board = board.apply(reply)?;
//! assert!(!board.is_terminal());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod position;
mod rules;
mod search;
mod transition;
mod types;

// Crate-level exports - positions and legal moves
pub use position::Position;

// Crate-level exports - derived rules
pub use rules::{check_winner, is_full, utility};

// Crate-level exports - minimax search
pub use search::{best_move, max_value, min_value};

// Crate-level exports - move application
pub use transition::MoveError;

// Crate-level exports - domain types
pub use types::{Board, GameStatus, Player, Square};
