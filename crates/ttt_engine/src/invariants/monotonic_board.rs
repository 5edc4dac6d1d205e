//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: the board is exactly what the history produces.
///
/// Replaying the history onto an empty board must never hit an occupied
/// cell and must end with the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for (mark, pos) in game.history().marked() {
            if reconstructed.place(pos, mark).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
