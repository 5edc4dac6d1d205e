//! The two players and whose turn it is.

use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Longest nickname kept, in bytes.
pub const MAX_NICKNAME_LEN: usize = 63;

/// Default nickname of the first player.
pub const DEFAULT_FIRST_NICKNAME: &str = "Player_1";

/// Default nickname of the second player.
pub const DEFAULT_SECOND_NICKNAME: &str = "Player_2";

/// A player's display name, at most [`MAX_NICKNAME_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub struct Nickname(String);

impl Nickname {
    /// Cleans raw input into a nickname.
    ///
    /// Everything from the first `'\n'` on is dropped (with a `'\r'` right
    /// before it), then the text is cut to 63 bytes. Longer input is
    /// truncated silently; the cut moves back to the previous character
    /// boundary when it would split a multi-byte character.
    #[instrument(skip(raw), fields(raw_len = raw.len()))]
    pub fn sanitize(raw: &str) -> Self {
        let line = match raw.find('\n') {
            Some(end) => &raw[..end],
            None => raw,
        };
        let line = line.strip_suffix('\r').unwrap_or(line);

        let mut end = line.len().min(MAX_NICKNAME_LEN);
        while !line.is_char_boundary(end) {
            end -= 1;
        }
        if end < line.len() {
            debug!(kept = end, dropped = line.len() - end, "Nickname truncated");
        }
        Self(line[..end].to_string())
    }

    /// Returns the nickname text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One of the two players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    nickname: Nickname,
    mark: Mark,
}

impl Player {
    fn new(nickname: Nickname, mark: Mark) -> Self {
        Self { nickname, mark }
    }

    /// Returns the nickname.
    pub fn nickname(&self) -> &str {
        self.nickname.as_str()
    }

    /// Returns the mark; fixed for the life of the game.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// Which of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Seat {
    /// Player 1, plays X and moves first.
    First,
    /// Player 2, plays O.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Both players plus the turn pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    first: Player,
    second: Player,
    current: Seat,
}

impl Players {
    /// Creates the default pair: "Player_1" with X, "Player_2" with O,
    /// player 1 to move.
    pub fn new() -> Self {
        Self::with_nicknames(
            Nickname::sanitize(DEFAULT_FIRST_NICKNAME),
            Nickname::sanitize(DEFAULT_SECOND_NICKNAME),
        )
    }

    /// Creates a pair with the given nicknames, player 1 to move.
    pub fn with_nicknames(first: Nickname, second: Nickname) -> Self {
        Self {
            first: Player::new(first, Mark::X),
            second: Player::new(second, Mark::O),
            current: Seat::First,
        }
    }

    /// Returns the player in a seat.
    pub fn seat(&self, seat: Seat) -> &Player {
        match seat {
            Seat::First => &self.first,
            Seat::Second => &self.second,
        }
    }

    /// Seat whose turn it is.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Player whose turn it is.
    pub fn current(&self) -> &Player {
        self.seat(self.current)
    }

    /// Renames the player whose turn it is. Mark and turn are untouched.
    #[instrument(skip(self, raw), fields(seat = ?self.current))]
    pub fn rename_current(&mut self, raw: &str) {
        let nickname = Nickname::sanitize(raw);
        debug!(nickname = %nickname, "Renaming current player");
        match self.current {
            Seat::First => self.first.nickname = nickname,
            Seat::Second => self.second.nickname = nickname,
        }
    }

    /// Hands the turn to the other player.
    pub(crate) fn pass_turn(&mut self) {
        self.current = self.current.other();
    }

    /// Both nicknames, first seat then second.
    pub fn nicknames(&self) -> (Nickname, Nickname) {
        (self.first.nickname.clone(), self.second.nickname.clone())
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::new()
    }
}
