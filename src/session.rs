//! The interactive command loop.
//!
//! A [`Session`] plays one game to completion on a line-oriented terminal.
//! Restarting discards the running game and starts the next one in the
//! same session; the session ends when a game finishes or the player quits.

use crate::config::TttConfig;
use crate::console::{self, Input};
use crate::error::SessionError;
use crate::render::Renderer;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};
use ttt_engine::{Game, Outcome, RestartPolicy};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player typed `q`.
    Quit,
    /// A game reached a win or a draw.
    Finished(Outcome),
}

/// What the inner loop hands back to the outer one.
enum Flow {
    Restart,
    End(SessionEnd),
}

/// Drives games between an input stream and an output terminal.
pub struct Session<R, W> {
    restart_policy: RestartPolicy,
    renderer: Renderer,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading commands from `input` and drawing to `output`.
    pub fn new(config: &TttConfig, input: R, output: W) -> Self {
        Self {
            restart_policy: *config.restart_policy(),
            renderer: Renderer::new(*config.clear_lines()),
            input,
            output,
        }
    }

    /// Runs games until one finishes or the player quits.
    ///
    /// # Errors
    ///
    /// [`SessionError::InputClosed`] if input ends before either happens,
    /// or an I/O error from the terminal.
    #[instrument(skip(self), fields(policy = ?self.restart_policy))]
    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        let mut game = Game::new();
        let mut games = 1u32;
        info!("Session started");

        loop {
            match self.play(&mut game)? {
                Flow::Restart => {
                    game = game.restart(self.restart_policy);
                    games += 1;
                    info!(games, "Game restarted");
                }
                Flow::End(end) => {
                    info!(?end, games, "Session ended");
                    return Ok(end);
                }
            }
        }
    }

    /// Consumes the session and returns the output terminal.
    pub fn into_output(self) -> W {
        self.output
    }

    fn play(&mut self, game: &mut Game) -> Result<Flow, SessionError> {
        loop {
            if let Some(outcome) = game.outcome() {
                self.finish(game)?;
                return Ok(Flow::End(SessionEnd::Finished(outcome)));
            }

            self.renderer.field(&mut self.output, game).map_err(SessionError::Output)?;
            self.renderer
                .move_prompt(&mut self.output, game.current_player().nickname())
                .map_err(SessionError::Output)?;
            let line = console::read_line(&mut self.input)?;

            match console::parse_line(&line) {
                Input::Coordinates(pos) => match game.apply_move(pos) {
                    Ok(verdict) => debug!(%pos, ?verdict, "Move applied"),
                    Err(e) => debug!(%pos, error = %e, "Move rejected"),
                },
                Input::Quit => {
                    info!("Player quit");
                    return Ok(Flow::End(SessionEnd::Quit));
                }
                Input::Restart => {
                    self.renderer.clear(&mut self.output).map_err(SessionError::Output)?;
                    return Ok(Flow::Restart);
                }
                Input::Rename => self.rename(game)?,
                Input::Error(e) => debug!(error = %e, "Input ignored"),
            }
            self.renderer.clear(&mut self.output).map_err(SessionError::Output)?;
        }
    }

    fn rename(&mut self, game: &mut Game) -> Result<(), SessionError> {
        self.renderer.rename_prompt(&mut self.output).map_err(SessionError::Output)?;
        let line = console::read_line(&mut self.input)?;
        game.rename_current(&line);
        info!(nickname = %game.current_player().nickname(), "Player renamed");
        Ok(())
    }

    fn finish(&mut self, game: &Game) -> Result<(), SessionError> {
        self.renderer.field(&mut self.output, game).map_err(SessionError::Output)?;
        self.renderer.game_over(&mut self.output, game).map_err(SessionError::Output)?;

        match serde_json::to_string(game.history()) {
            Ok(history) => info!(%history, outcome = ?game.outcome(), "Game finished"),
            Err(e) => warn!(error = %e, "Failed to serialize move history"),
        }
        Ok(())
    }
}

