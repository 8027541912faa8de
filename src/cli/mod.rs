//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::LauncherConfig;

/// Run a batch of concurrent test script invocations and wait for all of them
#[derive(Parser, Debug)]
#[command(name = "fanout-launcher")]
#[command(version)]
#[command(about = "Launch N concurrent runs of a test script and wait for all to finish")]
#[command(long_about = None)]
pub struct Args {
    /// Number of concurrent workers [env: FANOUT_WORKERS] [default: 10]
    #[arg(short = 'n', long)]
    pub workers: Option<usize>,

    /// Command each worker runs [env: FANOUT_COMMAND] [default: ./send.sh]
    #[arg(short, long)]
    pub command: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Apply flags that were given on top of `config`
    pub fn apply(&self, mut config: LauncherConfig) -> LauncherConfig {
        if let Some(workers) = self.workers {
            config = config.with_worker_count(workers);
        }
        if let Some(command) = &self.command {
            config = config.with_command(command.clone());
        }
        if self.verbose {
            config = config.with_verbose(true);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::parse_from(["fanout-launcher"]);
        assert_eq!(args.workers, None);
        assert_eq!(args.command, None);
        assert!(!args.verbose);

        let config = args.apply(LauncherConfig::default());
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "fanout-launcher",
            "--workers",
            "3",
            "--command",
            "./other.sh",
            "-v",
        ]);

        let config = args.apply(LauncherConfig::default().with_worker_count(7));
        assert_eq!(config.worker_count, 3);
        assert_eq!(config.command, PathBuf::from("./other.sh"));
        assert!(config.verbose);
    }

    #[test]
    fn test_flags_keep_env_values_when_absent() {
        let args = Args::parse_from(["fanout-launcher", "-n", "2"]);
        let base = LauncherConfig::default()
            .with_command("/env/cmd.sh")
            .with_verbose(true);

        let config = args.apply(base);
        assert_eq!(config.worker_count, 2);
        assert_eq!(config.command, PathBuf::from("/env/cmd.sh"));
        assert!(config.verbose);
    }
}
