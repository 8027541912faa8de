//! Configuration module
//!
//! Built-in defaults, environment overrides and validation.

mod env;

pub use env::EnvConfig;

use std::path::PathBuf;
use thiserror::Error;

/// Number of workers launched when nothing overrides it
pub const DEFAULT_WORKER_COUNT: usize = 10;

/// External command each worker runs when nothing overrides it
pub const DEFAULT_COMMAND: &str = "./send.sh";

/// Configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Worker count must be at least 1")]
    ZeroWorkers,

    #[error("External command path is empty")]
    EmptyCommand,
}

/// Launcher configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Number of concurrent workers
    pub worker_count: usize,

    /// Command run by every worker, with no arguments
    pub command: PathBuf,

    /// Debug-level logging
    pub verbose: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            command: PathBuf::from(DEFAULT_COMMAND),
            verbose: false,
        }
    }
}

impl LauncherConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        EnvConfig::load().apply(Self::default())
    }

    pub fn with_worker_count(mut self, count: usize) -> Self {
        self.worker_count = count;
        self
    }

    pub fn with_command(mut self, command: impl Into<PathBuf>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.worker_count == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.command.as_os_str().is_empty() {
            return Err(ConfigError::EmptyCommand);
        }
        Ok(())
    }
}
