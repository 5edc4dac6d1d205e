//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. They never mutate state, so they can be
//! called any number of times, and they only look at the mark of the player
//! who just moved: a line can only be completed by the latest move.

pub mod draw;
pub mod win;

pub use draw::has_free_cell;
pub use win::{completes_line, LINES};

use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Nothing decided; play continues.
    Pending,
    /// The mover completed a line.
    Win,
    /// No line completed and no empty cell left.
    Draw,
}

impl Verdict {
    /// Returns true for [`Verdict::Win`] and [`Verdict::Draw`].
    pub fn is_terminal(self) -> bool {
        !matches!(self, Verdict::Pending)
    }
}

/// Evaluates the board for the mark that just moved.
///
/// Must run after the mark is on the board; a win is only ever reported for
/// `mark`, and a draw only when `mark` has no line and the board is full.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mark: Mark) -> Verdict {
    if completes_line(board, mark) {
        Verdict::Win
    } else if !has_free_cell(board) {
        Verdict::Draw
    } else {
        Verdict::Pending
    }
}
