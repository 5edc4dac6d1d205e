//! Validated board coordinates.

use super::error::PositionError;
use super::types::{Board, SIZE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell address on the board, `row` and `col` both in `0..3`.
///
/// The only way to build one is through [`Position::new`] (or the
/// [`Position::ALL`] table), so every `Position` in the engine is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub struct Position {
    row: usize,
    col: usize,
}

#[derive(Serialize, Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col)
    }
}

impl From<Position> for RawPosition {
    fn from(pos: Position) -> Self {
        RawPosition {
            row: pos.row,
            col: pos.col,
        }
    }
}

impl Position {
    /// Creates a position.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::OutOfRange`] if either coordinate is 3 or more.
    pub fn new(row: usize, col: usize) -> Result<Self, PositionError> {
        if row >= SIZE || col >= SIZE {
            return Err(PositionError::OutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    /// Creates a position from signed user input.
    ///
    /// # Errors
    ///
    /// [`PositionError::Negative`] if either value is below zero,
    /// [`PositionError::OutOfRange`] if either is 3 or more.
    pub fn from_signed(row: i64, col: i64) -> Result<Self, PositionError> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) => Self::new(r, c),
            _ => Err(PositionError::Negative { row, col }),
        }
    }

    /// Row index (0 = top).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0 = left).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Creates position from row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::new(index / SIZE, index % SIZE).ok()
    }

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Returns only the empty cells of the board.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
