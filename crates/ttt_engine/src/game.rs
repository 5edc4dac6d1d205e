//! The game aggregate: board, players, history and status.
//!
//! [`Game::apply_move`] is the single state transition of a running game.
//! Restarting never revives a finished game; it builds a new one.

use super::contracts::{Contract, MoveContract};
use super::error::MoveError;
use super::history::MoveHistory;
use super::player::{Player, Players, Seat};
use super::position::Position;
use super::rules::{self, Verdict};
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player in this seat completed a line.
    Winner(Seat),
    /// Board filled without a line.
    Draw,
}

impl Outcome {
    /// Returns the winning seat if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Winner(seat) => Some(*seat),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// Whether moves are still accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Moves are accepted.
    InProgress,
    /// Finished; the status never leaves this state.
    Over(Outcome),
}

/// What happens to nicknames when a game is restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestartPolicy {
    /// Both players go back to "Player_1" and "Player_2".
    #[default]
    Reset,
    /// Renamed players keep their nicknames.
    Keep,
}

/// A complete game of tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) players: Players,
    pub(crate) history: MoveHistory,
    pub(crate) status: Status,
}

impl Game {
    /// Creates a new game: empty board, default players, player 1 to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_players(Players::new())
    }

    fn with_players(players: Players) -> Self {
        Self {
            board: Board::new(),
            players,
            history: MoveHistory::new(),
            status: Status::InProgress,
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// On success the move is recorded, the board is evaluated for the
    /// mover's mark and the turn passes only if the verdict is
    /// [`Verdict::Pending`]. On a win or a draw the game is over and the
    /// current player stays the one who finished it.
    ///
    /// # Errors
    ///
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    /// - [`MoveError::GameOver`] if the game has finished
    ///
    /// A rejected move changes nothing.
    #[instrument(skip(self), fields(seat = ?self.players.current_seat()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<Verdict, MoveError> {
        MoveContract::pre(self, &pos)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.players.current().mark();
        self.board.place(pos, mark)?;
        self.history.record(pos);

        let verdict = rules::evaluate(&self.board, mark);
        match verdict {
            Verdict::Win => {
                let seat = self.players.current_seat();
                info!(?seat, %mark, "Game won");
                self.status = Status::Over(Outcome::Winner(seat));
            }
            Verdict::Draw => {
                info!("Game drawn");
                self.status = Status::Over(Outcome::Draw);
            }
            Verdict::Pending => {
                self.players.pass_turn();
                debug!(next = ?self.players.current_seat(), "Turn passed");
            }
        }

        #[cfg(debug_assertions)]
        assert_postconditions(&before, self);

        Ok(verdict)
    }

    /// Renames the current player. Board, marks and turn are untouched.
    #[instrument(skip(self, raw))]
    pub fn rename_current(&mut self, raw: &str) {
        self.players.rename_current(raw);
    }

    /// Discards this game and returns a fresh one.
    #[instrument(skip(self))]
    pub fn restart(self, policy: RestartPolicy) -> Self {
        debug!(moves = self.history.len(), "Discarding game");
        match policy {
            RestartPolicy::Reset => Self::new(),
            RestartPolicy::Keep => {
                let (first, second) = self.players.nicknames();
                Self::with_players(Players::with_nicknames(first, second))
            }
        }
    }

    /// Rebuilds a game by applying recorded moves in order.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in moves {
            game.apply_move(*pos)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Returns both players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Player whose turn it is (the winner once the game is won).
    pub fn current_player(&self) -> &Player {
        self.players.current()
    }

    /// Returns the status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true once the game has finished.
    pub fn is_over(&self) -> bool {
        matches!(self.status, Status::Over(_))
    }

    /// Returns the outcome once the game has finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::InProgress => None,
            Status::Over(outcome) => Some(outcome),
        }
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<&Player> {
        self.outcome()
            .and_then(|outcome| outcome.winner())
            .map(|seat| self.players.seat(seat))
    }
}

/// Panics if a move left the game violating an invariant (debug builds).
#[cfg(debug_assertions)]
fn assert_postconditions(before: &Game, after: &Game) {
    if let Err(e) = MoveContract::post(before, after) {
        panic!("{}", e);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
