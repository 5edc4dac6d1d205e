//! Game-state engine for two-player tic-tac-toe.
//!
//! Owns the rules and nothing else: a 3x3 [`Board`], two [`Players`] with a
//! turn pointer, an append-only [`MoveHistory`] and the [`Status`] of the
//! game. Input parsing, rendering and terminal control live in the `ttt`
//! application crate.
//!
//! # Example
//!
//! ```
//! use ttt_engine::{Game, Position, Verdict};
//!
//! let mut game = Game::new();
//! let verdict = game.apply_move(Position::new(1, 1)?)?;
//! assert_eq!(verdict, Verdict::Pending);
//! assert_eq!(game.current_player().nickname(), "Player_2");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
mod player;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use error::{MoveError, PositionError};
pub use game::{Game, Outcome, RestartPolicy, Status};
pub use history::MoveHistory;
pub use player::{
    Nickname, Player, Players, Seat, DEFAULT_FIRST_NICKNAME, DEFAULT_SECOND_NICKNAME,
    MAX_NICKNAME_LEN,
};
pub use position::Position;
pub use rules::{evaluate, Verdict};
pub use types::{Board, Cell, Mark, SIZE};
