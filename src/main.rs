//! fanout-launcher - concurrent test script launcher
//!
//! Starts a fixed number of worker processes, each running an external test
//! script once, and exits only after every one of them has terminated.
//! Exit statuses of the script are not inspected.
//!
//! ## Usage
//!
//! ```bash
//! # Run ./send.sh ten times concurrently
//! fanout-launcher
//!
//! # Different script and worker count
//! fanout-launcher --workers 3 --command ./smoke.sh
//! ```

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod config;
mod executor;
mod utils;

use cli::Args;
use config::LauncherConfig;
use executor::FanOutLauncher;
use utils::{init_logger, LogLevel};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.apply(LauncherConfig::from_env());

    init_logger(LogLevel::from_verbose(config.verbose));

    config.validate().context("Invalid launcher configuration")?;

    FanOutLauncher::from_config(&config)
        .run_batch(config.worker_count)
        .await
        .context("Worker batch failed")?;

    Ok(())
}
