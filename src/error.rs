//! Errors raised by the board and the game session

use thiserror::Error;

use crate::WIDTH;

/// Everything that can go wrong when moving on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The column has no empty cell left, the board is unchanged
    #[error("Invalid move, column {} full", .column + 1)]
    ColumnFull { column: usize },

    #[error("Invalid move, column {} out of range. Columns must be between 1 and {}", .column + 1, WIDTH)]
    InvalidColumn { column: usize },

    /// A move was requested on a board without any empty cell
    #[error("No legal moves left, the board is full")]
    NoLegalMoves,

    /// A move was requested after the game was already decided
    #[error("The game is already over")]
    GameOver,

    /// A board snapshot has a token with an empty cell below it
    #[error("Token at row {row}, column {} is floating", .column + 1)]
    Floating { row: usize, column: usize },

    #[error("could not parse '{0}' as a valid move")]
    ParseMove(char),
}
