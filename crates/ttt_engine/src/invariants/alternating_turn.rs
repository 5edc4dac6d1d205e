//! Alternating turn invariant: X and O take turns, X first.

use super::super::{Game, Mark, Seat};
use super::Invariant;

/// Invariant: players alternate.
///
/// The board holds as many X as O, or one more X. While the game runs, the
/// seat to move follows from the number of moves; once it is over, the
/// current seat is the one that made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        if x != o && x != o + 1 {
            return false;
        }

        let moves = game.history().len();
        let expected = if game.is_over() {
            if moves % 2 == 1 { Seat::First } else { Seat::Second }
        } else if moves % 2 == 0 {
            Seat::First
        } else {
            Seat::Second
        };

        game.players().current_seat() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = Game::replay(&[pos(0, 0), pos(1, 1), pos(0, 2), pos(2, 0), pos(2, 2)]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_player().mark(), Mark::O);
    }

    #[test]
    fn test_finished_game_keeps_finisher() {
        let game = Game::replay(&[pos(0, 0), pos(1, 1), pos(0, 1), pos(2, 2), pos(0, 2)]).unwrap();
        assert!(game.is_over());
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_skipped_turn_violates() {
        let mut game = Game::replay(&[pos(0, 0)]).unwrap();
        game.players.pass_turn();

        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
