//! Engine error types.
//!
//! Rejections are ordinary values: the engine never prints and never panics
//! on bad input, it hands one of these back to the caller.

use super::position::Position;

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Error building a [`Position`] from raw coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PositionError {
    /// A coordinate is 3 or more.
    #[display("Position ({}, {}) is outside the 3x3 board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A coordinate is negative.
    #[display("Position ({}, {}) is outside the 3x3 board", row, col)]
    Negative {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },
}

impl std::error::Error for MoveError {}

impl std::error::Error for PositionError {}
