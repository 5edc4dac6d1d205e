//! Append-only record of the cells played in a game.

use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Ordered move history.
///
/// Entries are only ever appended. Player 1 (mark X) always opens, so the
/// mark of each entry follows from its index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveHistory {
    moves: Vec<Position>,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move.
    #[instrument(skip(self), fields(len = self.moves.len()))]
    pub fn record(&mut self, pos: Position) {
        self.moves.push(pos);
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if no move has been recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Move at the given index, in play order.
    pub fn get(&self, index: usize) -> Option<Position> {
        self.moves.get(index).copied()
    }

    /// Most recent move.
    pub fn last(&self) -> Option<Position> {
        self.moves.last().copied()
    }

    /// All moves in play order.
    pub fn as_slice(&self) -> &[Position] {
        &self.moves
    }

    /// Iterates over moves in play order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.moves.iter().copied()
    }

    /// Iterates over moves paired with the mark that played them.
    pub fn marked(&self) -> impl Iterator<Item = (Mark, Position)> + '_ {
        self.moves.iter().enumerate().map(|(i, pos)| {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            (mark, *pos)
        })
    }
}
