//! Text rendering of the game onto a line-oriented terminal.
//!
//! Everything writes to an arbitrary [`Write`], so a `Vec<u8>` works as a
//! test terminal. Only [`Renderer::clear`] and [`Renderer::rename_prompt`]
//! emit cursor control sequences, and only when clearing is enabled.

use crate::console::Command;
use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};
use ttt_engine::{Cell, Game, Outcome, Position, SIZE};

const BOX_TOP: &str = " _____________________________";
const BOX_BOTTOM: &str = "|_____________________________|";
const BOX_INNER: usize = 29;

/// Draws the board, prompts and end-of-game message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    clear_lines: u16,
}

impl Renderer {
    /// Creates a renderer that erases `clear_lines` lines between frames.
    pub fn new(clear_lines: u16) -> Self {
        Self { clear_lines }
    }

    /// Returns true if cursor control sequences are emitted.
    pub fn clears(&self) -> bool {
        self.clear_lines > 0
    }

    /// Draws the banner and the board.
    #[instrument(skip_all)]
    pub fn field(&self, out: &mut impl Write, game: &Game) -> io::Result<()> {
        banner(out)?;
        writeln!(out, "\t    0   1   2")?;
        writeln!(out, "\t   ___ ___ ___")?;
        for row in 0..SIZE {
            write!(out, "\t{} |", row)?;
            for col in 0..SIZE {
                let cell = Position::new(row, col)
                    .map(|pos| game.board().get(pos))
                    .unwrap_or_default();
                write!(out, "_{}_|", cell_symbol(cell))?;
            }
            writeln!(out)?;
        }
        writeln!(out)
    }

    /// Asks the current player for a move: `> name: `.
    pub fn move_prompt(&self, out: &mut impl Write, nickname: &str) -> io::Result<()> {
        write!(out, "> {}: ", nickname)?;
        out.flush()
    }

    /// Replaces the echoed command line with the rename prompt `> `.
    pub fn rename_prompt(&self, out: &mut impl Write) -> io::Result<()> {
        if self.clears() {
            queue!(out, MoveToColumn(0), MoveUp(1), Clear(ClearType::CurrentLine))?;
        }
        write!(out, "> ")?;
        out.flush()
    }

    /// Draws the box announcing the winner or the draw.
    #[instrument(skip_all)]
    pub fn game_over(&self, out: &mut impl Write, game: &Game) -> io::Result<()> {
        let message = match game.outcome() {
            Some(Outcome::Draw) => "This game ended in a draw!".to_string(),
            Some(Outcome::Winner(seat)) => {
                format!("{} is a winner!", game.players().seat(seat).nickname())
            }
            None => return Ok(()),
        };
        writeln!(out, "{}", BOX_TOP)?;
        writeln!(out, "|{:width$}|", "", width = BOX_INNER)?;
        boxed(out, &message)?;
        writeln!(out, "{}", BOX_BOTTOM)?;
        out.flush()
    }

    /// Erases the previous frame, walking the cursor up line by line.
    #[instrument(skip(self, out), fields(lines = self.clear_lines))]
    pub fn clear(&self, out: &mut impl Write) -> io::Result<()> {
        let rows = self.clear_lines;
        for i in 0..rows {
            if i + 1 < rows {
                queue!(out, Clear(ClearType::UntilNewLine))?;
            }
            queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine), MoveUp(1))?;
        }
        trace!("Frame cleared");
        out.flush()
    }
}

fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", BOX_TOP)?;
    boxed(out, "        Tic Tac Toe")?;
    boxed(out, "To move, enter the row and")?;
    boxed(out, "column separated by a space.")?;
    boxed(out, "")?;
    boxed(out, "Commands:")?;
    for command in Command::iter() {
        boxed(out, &format!("{} - {}", command, command.help()))?;
    }
    boxed(out, "")?;
    boxed(out, "Enjoy the game!")?;
    writeln!(out, "{}", BOX_BOTTOM)?;
    writeln!(out)
}

fn boxed(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "| {:<width$}|", text, width = BOX_INNER - 1)
}

fn cell_symbol(cell: Cell) -> char {
    match cell.mark() {
        Some(mark) => mark.symbol(),
        None => '_',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn play(moves: &[(usize, usize)]) -> Game {
        let moves: Vec<Position> = moves
            .iter()
            .map(|&(r, c)| Position::new(r, c).unwrap())
            .collect();
        Game::replay(&moves).unwrap()
    }

    #[test]
    fn test_field_layout() {
        let game = play(&[(0, 0), (1, 1)]);
        let text = render(|out| Renderer::new(0).field(out, &game));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], BOX_TOP);
        assert_eq!(lines[1], "|         Tic Tac Toe         |");
        assert_eq!(lines[6], "| q - exit                    |");
        assert_eq!(lines[7], "| r - restart                 |");
        assert_eq!(lines[8], "| n - rename                  |");
        assert_eq!(lines[11], BOX_BOTTOM);
        assert_eq!(lines[15], "\t0 |_X_|___|___|");
        assert_eq!(lines[16], "\t1 |___|_O_|___|");
        assert_eq!(lines[17], "\t2 |___|___|___|");
        assert!(lines.iter().all(|l| !l.contains('\x1b')));
    }

    #[test]
    fn test_frame_fits_default_clear_height() {
        let text = render(|out| {
            let renderer = Renderer::new(20);
            renderer.field(out, &Game::new())?;
            renderer.move_prompt(out, "Player_1")
        });
        // Frame lines plus the line the player's Enter starts.
        assert_eq!(text.matches('\n').count() + 1, 20);
        assert!(text.ends_with("> Player_1: "));
    }

    #[test]
    fn test_game_over_messages() {
        let mut won = play(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        won.rename_current("Ann");
        won.apply_move(Position::new(0, 2).unwrap()).unwrap();
        let text = render(|out| Renderer::new(0).game_over(out, &won));
        assert!(text.contains("| Ann is a winner!"));

        let drawn = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);
        let text = render(|out| Renderer::new(0).game_over(out, &drawn));
        assert!(text.contains("This game ended in a draw!"));

        let text = render(|out| Renderer::new(0).game_over(out, &Game::new()));
        assert!(text.is_empty());
    }

    #[test]
    fn test_clear_emits_escapes_only_when_enabled() {
        assert!(render(|out| Renderer::new(0).clear(out)).is_empty());
        assert_eq!(render(|out| Renderer::new(0).rename_prompt(out)), "> ");

        let text = render(|out| Renderer::new(3).clear(out));
        assert_eq!(text.matches("\x1b[1A").count(), 3);
        assert!(text.contains("\x1b[2K"));
        assert!(text.contains("\x1b[K"));
    }
}
