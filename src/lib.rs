//! Terminal tic-tac-toe for two players sharing one keyboard.
//!
//! The rules live in [`ttt_engine`]; this crate adds the line-based
//! console around them.
//!
//! # Architecture
//!
//! - **Console**: parses `row col` coordinates and the `q`/`r`/`n` commands
//! - **Render**: draws the banner, board, prompts and end-of-game box
//! - **Session**: the command loop tying input, engine and output together
//! - **Config**: TOML settings with command-line overrides
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use ttt::{Session, SessionEnd, TttConfig};
//!
//! let config = TttConfig::default().with_clear_lines(0);
//! let input = Cursor::new("0 0\n1 1\n0 1\n2 2\n0 2\n");
//! let mut session = Session::new(&config, input, Vec::new());
//! assert!(matches!(session.run()?, SessionEnd::Finished(_)));
//! # Ok::<(), ttt::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod error;
mod render;
mod session;

pub use config::{TttConfig, DEFAULT_CONFIG_PATH};
pub use console::{parse_line, read_line, Command, Input, InputError};
pub use error::{ConfigError, ExitStatus, SessionError};
pub use render::Renderer;
pub use session::{Session, SessionEnd};
