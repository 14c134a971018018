use std::time::Duration;
use tracing::warn;

/// Day-of-month a generated rent obligation falls due on when the
/// source obligation has no reminder day configured.
pub const DEFAULT_DUE_DAY: u32 = 1;

const DEFAULT_WORKER_INTERVAL_SECS: u64 = 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    /// How long the worker waits between two cycles. One cycle runs
    /// the reminder dispatch and the recurring rent generation once.
    pub worker_interval: Duration,
}

impl Config {
    pub fn new() -> Self {
        let worker_interval_secs = match std::env::var("WORKER_INTERVAL_SECS") {
            Ok(secs) => match secs.parse::<u64>() {
                Ok(secs) => secs,
                Err(_) => {
                    warn!(
                        "The given WORKER_INTERVAL_SECS: {} is not valid, falling back to the default interval: {}.",
                        secs, DEFAULT_WORKER_INTERVAL_SECS
                    );
                    DEFAULT_WORKER_INTERVAL_SECS
                }
            },
            Err(_) => DEFAULT_WORKER_INTERVAL_SECS,
        };
        Self {
            worker_interval: Duration::from_secs(worker_interval_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
