//! Line-oriented input: reading lines and turning them into commands.
//!
//! A line is either two integers (`row col`) or a single command letter.

use crate::error::SessionError;
use derive_more::Display;
use std::io::BufRead;
use std::str::FromStr;
use strum::{EnumIter, EnumMessage, EnumString};
use tracing::{debug, instrument};
use ttt_engine::{Position, PositionError};

/// Single-letter commands accepted at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, EnumMessage, strum::Display)]
pub enum Command {
    /// Leave the program.
    #[strum(serialize = "q", message = "exit")]
    Quit,
    /// Start a new game.
    #[strum(serialize = "r", message = "restart")]
    Restart,
    /// Rename the player to move.
    #[strum(serialize = "n", message = "rename")]
    Rename,
}

impl Command {
    /// Help text shown next to the command letter.
    pub fn help(&self) -> &'static str {
        self.get_message().unwrap_or_default()
    }
}

/// Why a line was not understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Blank line.
    #[display("Empty input")]
    Empty,
    /// Neither coordinates nor a command.
    #[display("Unrecognized input: {:?}", _0)]
    Unrecognized(String),
    /// Two integers, but not a cell on the board.
    #[display("{}", _0)]
    OutOfRange(PositionError),
}

impl std::error::Error for InputError {}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Cell to play.
    Coordinates(Position),
    /// Leave the program.
    Quit,
    /// Rename the player to move.
    Rename,
    /// Start a new game.
    Restart,
    /// Anything else.
    Error(InputError),
}

impl From<Command> for Input {
    fn from(command: Command) -> Self {
        match command {
            Command::Quit => Input::Quit,
            Command::Restart => Input::Restart,
            Command::Rename => Input::Rename,
        }
    }
}

/// Parses one line of user input.
///
/// Two whitespace-separated integers are coordinates; both must lie in
/// `0..3`. Otherwise the very first character must be a command letter and
/// everything after it whitespace. Leading whitespace before a command is
/// an error.
#[instrument]
pub fn parse_line(line: &str) -> Input {
    if line.trim().is_empty() {
        return Input::Error(InputError::Empty);
    }

    if let Some((row, col)) = parse_coordinates(line) {
        return match Position::from_signed(row, col) {
            Ok(pos) => Input::Coordinates(pos),
            Err(e) => {
                debug!(row, col, "Coordinates off the board");
                Input::Error(InputError::OutOfRange(e))
            }
        };
    }

    let mut chars = line.chars();
    let command = chars
        .next()
        .and_then(|c| Command::from_str(c.encode_utf8(&mut [0; 4])).ok());
    match command {
        Some(command) if chars.as_str().trim().is_empty() => command.into(),
        _ => Input::Error(InputError::Unrecognized(line.trim_end().to_string())),
    }
}

fn parse_coordinates(line: &str) -> Option<(i64, i64)> {
    let mut tokens = line.split_whitespace();
    let row = tokens.next()?.parse().ok()?;
    let col = tokens.next()?.parse().ok()?;
    match tokens.next() {
        None => Some((row, col)),
        Some(_) => None,
    }
}

/// Reads one line, terminator included.
///
/// Bytes that are not UTF-8 become U+FFFD, so such a line parses as an
/// input error instead of failing the read.
///
/// # Errors
///
/// [`SessionError::InputClosed`] at end of file, [`SessionError::Input`] if
/// the read fails.
#[instrument(skip(input))]
pub fn read_line(input: &mut impl BufRead) -> Result<String, SessionError> {
    let mut bytes = Vec::new();
    let read = input
        .read_until(b'\n', &mut bytes)
        .map_err(SessionError::Input)?;
    if read == 0 {
        debug!("End of input");
        return Err(SessionError::InputClosed);
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strum::IntoEnumIterator;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(parse_line("1 2\n"), Input::Coordinates(pos(1, 2)));
        assert_eq!(parse_line("0   0"), Input::Coordinates(pos(0, 0)));
        assert_eq!(parse_line("  2\t1  \r\n"), Input::Coordinates(pos(2, 1)));
    }

    #[test]
    fn test_coordinates_out_of_range() {
        assert!(matches!(
            parse_line("3 0\n"),
            Input::Error(InputError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_line("-1 2\n"),
            Input::Error(InputError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse_line("q\n"), Input::Quit);
        assert_eq!(parse_line("n\n"), Input::Rename);
        assert_eq!(parse_line("r  \n"), Input::Restart);
    }

    #[test]
    fn test_rejects_malformed_lines() {
        for line in ["\n", "   \n", " q\n", "quit\n", "q 5\n", "1\n", "1 2 3\n", "x\n", "Q\n"] {
            assert!(
                matches!(parse_line(line), Input::Error(_)),
                "{:?} should be rejected",
                line
            );
        }
    }

    #[test]
    fn test_every_command_has_help() {
        for command in Command::iter() {
            assert!(!command.help().is_empty());
            assert_eq!(command.to_string().len(), 1);
        }
    }

    #[test]
    fn test_read_line_until_eof() {
        let mut input = Cursor::new("1 1\nq");
        assert_eq!(read_line(&mut input).unwrap(), "1 1\n");
        assert_eq!(read_line(&mut input).unwrap(), "q");
        assert!(matches!(read_line(&mut input), Err(SessionError::InputClosed)));
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let mut input = Cursor::new(b"\xff\xfe\nJos\xe9\n".to_vec());
        let garbage = read_line(&mut input).unwrap();
        assert_eq!(garbage, "\u{FFFD}\u{FFFD}\n");
        assert!(matches!(
            parse_line(&garbage),
            Input::Error(InputError::Unrecognized(_))
        ));
        assert_eq!(read_line(&mut input).unwrap(), "Jos\u{FFFD}\n");
    }
}
