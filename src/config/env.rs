//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;
use std::path::PathBuf;

use super::LauncherConfig;

/// Environment variable prefix
const ENV_PREFIX: &str = "FANOUT";

/// Overrides read from environment variables
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Worker count from FANOUT_WORKERS
    pub workers: Option<usize>,
    /// External command from FANOUT_COMMAND
    pub command: Option<PathBuf>,
    /// Verbose from FANOUT_VERBOSE
    pub verbose: Option<bool>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(&format!("{ENV_PREFIX}_{name}"));

        Self {
            workers: get("WORKERS").and_then(|v| v.trim().parse().ok()),
            command: get("COMMAND")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            verbose: get("VERBOSE").map(|v| parse_bool(&v)),
        }
    }

    /// Apply the overrides that are present on top of `config`
    pub fn apply(&self, mut config: LauncherConfig) -> LauncherConfig {
        if let Some(workers) = self.workers {
            config = config.with_worker_count(workers);
        }
        if let Some(command) = &self.command {
            config = config.with_command(command.clone());
        }
        if let Some(verbose) = self.verbose {
            config = config.with_verbose(verbose);
        }
        config
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enabled"
    )
}
