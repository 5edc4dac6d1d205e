//! Runtime configuration loaded from TOML.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use ttt_engine::RestartPolicy;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "ttt.toml";

/// Settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TttConfig {
    /// What happens to nicknames on restart ("reset" or "keep").
    #[serde(default)]
    restart_policy: RestartPolicy,

    /// Lines erased before each redraw; 0 disables clearing.
    #[serde(default = "default_clear_lines")]
    clear_lines: u16,

    /// Log file path. Logging is off when absent.
    #[serde(default)]
    log_file: Option<PathBuf>,

    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_clear_lines() -> u16 {
    20
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TttConfig {
    fn default() -> Self {
        Self {
            restart_policy: RestartPolicy::default(),
            clear_lines: default_clear_lines(),
            log_file: None,
            log_filter: default_log_filter(),
        }
    }
}

impl TttConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            restart_policy = ?config.restart_policy,
            clear_lines = config.clear_lines,
            "Config loaded"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Sets the restart policy.
    pub fn with_restart_policy(mut self, policy: RestartPolicy) -> Self {
        self.restart_policy = policy;
        self
    }

    /// Sets how many lines are cleared before a redraw.
    pub fn with_clear_lines(mut self, lines: u16) -> Self {
        self.clear_lines = lines;
        self
    }

    /// Sets or disables the log file.
    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        self.log_file = log_file;
        self
    }
}
