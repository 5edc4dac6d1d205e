//! Command-line interface for ttt.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = ttt::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Keep nicknames when a game is restarted
    #[arg(long)]
    pub keep_names: bool,

    /// Lines erased between frames (0 disables cursor control)
    #[arg(long)]
    pub clear_lines: Option<u16>,

    /// Write logs to this file (off unless set here or in the config)
    #[arg(long, conflicts_with = "no_log")]
    pub log_file: Option<PathBuf>,

    /// Disable logging even if the config file names a log file
    #[arg(long)]
    pub no_log: bool,
}
