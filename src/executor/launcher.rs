//! Fan-out launcher
//!
//! Starts a fixed number of worker processes, each running the external
//! command once, then reaps them in whatever order they finish.

use futures::stream::{FuturesUnordered, StreamExt};
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Instant;
use thiserror::Error;
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use crate::config::LauncherConfig;

/// `ENOEXEC`: the file exists but is not in a format the kernel can run
const ENOEXEC: i32 = 8;

/// Launcher errors
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Worker count must be at least 1")]
    InvalidWorkerCount,

    #[error("Failed to spawn worker {index} ({command}): {source}")]
    Spawn {
        index: usize,
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to wait for worker (pid {pid:?}): {source}")]
    Join {
        pid: Option<u32>,
        #[source]
        source: io::Error,
    },
}

/// Spawns worker processes running one external command and joins them
#[derive(Clone, Debug)]
pub struct FanOutLauncher {
    command: PathBuf,
}

impl FanOutLauncher {
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(config.command.clone())
    }

    /// Run `count` workers concurrently and wait until every one has exited.
    ///
    /// Workers are joined in completion order, not spawn order. Exit
    /// statuses are logged and otherwise ignored, so a failing command is
    /// not an error. A command that cannot be executed (missing, not
    /// executable, bad format) counts as a worker that ran and failed.
    /// Any other spawn failure aborts the batch; workers that already
    /// started are left running.
    pub async fn run_batch(&self, count: usize) -> Result<(), LaunchError> {
        if count == 0 {
            return Err(LaunchError::InvalidWorkerCount);
        }

        info!(
            "Launching {} workers running {}",
            count,
            self.command.display()
        );
        let start = Instant::now();

        let mut pending = FuturesUnordered::new();
        let mut finished = 0;
        for index in 0..count {
            match Command::new(&self.command).spawn() {
                Ok(child) => {
                    debug!("Spawned worker {} (pid {:?})", index, child.id());
                    pending.push(join_worker(child));
                }
                Err(e) if is_exec_failure(&e) => {
                    finished += 1;
                    warn!(
                        "Worker {} could not run {}: {}",
                        index,
                        self.command.display(),
                        e
                    );
                }
                Err(source) => {
                    return Err(LaunchError::Spawn {
                        index,
                        command: self.command.display().to_string(),
                        source,
                    })
                }
            }
        }

        while let Some((pid, status)) = pending.next().await {
            let status = status.map_err(|source| LaunchError::Join { pid, source })?;
            finished += 1;
            debug!(
                "Reaped worker pid {:?} ({}), {}/{} done",
                pid, status, finished, count
            );
        }
        debug_assert_eq!(finished, count);

        info!(
            "All {} workers finished in {}ms",
            count,
            start.elapsed().as_millis()
        );
        Ok(())
    }
}

/// Errors raised by exec of the command itself rather than process creation
fn is_exec_failure(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
    ) || err.raw_os_error() == Some(ENOEXEC)
}

async fn join_worker(mut child: Child) -> (Option<u32>, io::Result<ExitStatus>) {
    let pid = child.id();
    (pid, child.wait().await)
}
