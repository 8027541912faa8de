//! Worker execution engine
//!
//! Spawns a batch of concurrent worker processes and joins them.

mod launcher;

pub use launcher::{FanOutLauncher, LaunchError};
