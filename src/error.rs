//! Application error types and process exit statuses.

use derive_more::{Display, Error};
use tracing::instrument;

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Quit or finished game.
    Success = 0,
    /// Fatal setup or terminal failure.
    Failure = 1,
    /// The input stream closed or could not be read.
    InputError = 2,
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status as u8)
    }
}

/// Fatal error raised by the command loop.
///
/// Bad moves and unparsable lines are not errors here; the session retries
/// them. Only conditions that end interaction reach this type.
#[derive(Debug, Display, Error)]
pub enum SessionError {
    /// End of file on the input stream.
    #[display("Input stream closed")]
    InputClosed,
    /// Reading the input stream failed.
    #[display("Failed to read input: {}", _0)]
    Input(std::io::Error),
    /// Writing to the terminal failed.
    #[display("Failed to write output: {}", _0)]
    Output(std::io::Error),
}

impl SessionError {
    /// Exit status the process should end with.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            SessionError::InputClosed | SessionError::Input(_) => ExitStatus::InputError,
            SessionError::Output(_) => ExitStatus::Failure,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
