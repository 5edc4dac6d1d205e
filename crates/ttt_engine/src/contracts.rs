//! Contract-based validation for moves.
//!
//! A move is accepted only if its preconditions hold; after it is applied
//! the postconditions are checked in debug builds.

use super::error::MoveError;
use super::game::Game;
use super::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use super::position::Position;
use super::types::Cell;
use tracing::{instrument, warn};

/// Preconditions and postconditions of a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

/// Precondition: the game has not finished.
pub struct GameIsActive;

impl GameIsActive {
    /// Rejects moves on a finished game.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied cell.
    #[instrument(skip(game))]
    pub fn check(pos: &Position, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(*pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(*pos))
        }
    }
}

/// Contract for [`Game::apply_move`].
///
/// Preconditions:
/// - game in progress
/// - target cell empty
///
/// Postconditions:
/// - exactly one move was appended and no earlier cell changed
/// - every engine invariant holds
pub struct MoveContract;

impl Contract<Game, Position> for MoveContract {
    fn pre(game: &Game, pos: &Position) -> Result<(), MoveError> {
        GameIsActive::check(game)?;
        CellIsEmpty::check(pos, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), InvariantViolation> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "Move did not append exactly one history entry"
            );
            return Err(InvariantViolation::new("History grows by one per move"));
        }

        let kept = Position::ALL.iter().all(|pos| {
            let old = before.board().get(*pos);
            old == Cell::Empty || old == after.board().get(*pos)
        });
        if !kept {
            return Err(InvariantViolation::new("Occupied cells never change"));
        }

        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvariantViolation::new(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_precondition_empty_cell() {
        let game = Game::new();
        assert!(MoveContract::pre(&game, &pos(1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut game = Game::new();
        game.apply_move(pos(1, 1)).unwrap();
        assert_eq!(
            MoveContract::pre(&game, &pos(1, 1)),
            Err(MoveError::CellOccupied(pos(1, 1)))
        );
    }

    #[test]
    fn test_precondition_finished_game() {
        let game = Game::replay(&[pos(0, 0), pos(1, 0), pos(0, 1), pos(1, 1), pos(0, 2)]).unwrap();
        assert_eq!(MoveContract::pre(&game, &pos(2, 2)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new();
        let mut after = before.clone();
        after.apply_move(pos(2, 1)).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let mut before = Game::new();
        before.apply_move(pos(0, 0)).unwrap();

        let mut after = before.clone();
        after.board = crate::Board::new();
        after.board.place(pos(0, 0), Mark::O).unwrap();
        after.history.record(pos(1, 1));

        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_missing_history() {
        let before = Game::new();
        let mut after = before.clone();
        after.board.place(pos(0, 0), Mark::X).unwrap();

        assert!(MoveContract::post(&before, &after).is_err());
    }
}
