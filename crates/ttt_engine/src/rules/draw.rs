//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if any cell is still empty.
///
/// A board with no free cell and no completed line is a draw.
#[instrument(skip(board))]
pub fn has_free_cell(board: &Board) -> bool {
    board.rows().iter().flatten().any(|cell| *cell == Cell::Empty)
}
