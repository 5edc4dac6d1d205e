//! Distinct marks invariant: player 1 plays X, player 2 plays O.

use super::super::{Game, Mark, Seat};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: the two seats hold different marks, X for the first.
pub struct DistinctMarksInvariant;

impl Invariant<Game> for DistinctMarksInvariant {
    fn holds(game: &Game) -> bool {
        Seat::iter()
            .map(|seat| game.players().seat(seat).mark())
            .eq(Mark::iter())
    }

    fn description() -> &'static str {
        "Players hold distinct marks (X for player 1, O for player 2)"
    }
}
