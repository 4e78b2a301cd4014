use crate::config::WallConfig;
use backoff::{backoff::Backoff, exponential::ExponentialBackoff};
use std::time::Duration;
use tracing::debug;

/// Wait-duration source for feed-fetch retries.
///
/// Consecutive failures grow the wait exponentially from the initial value;
/// any success resets the sequence. Randomization is disabled so the waits
/// are exactly `initial, initial*m, initial*m^2, ...`, capped only when a
/// ceiling is configured.
pub struct RetryController {
    initial_wait: Duration,
    backoff: ExponentialBackoff<backoff::SystemClock>,
}

impl RetryController {
    pub fn new(initial_wait: Duration, multiplier: f64, max_wait: Option<Duration>) -> Self {
        let backoff = ExponentialBackoff {
            current_interval: initial_wait,
            initial_interval: initial_wait,
            randomization_factor: 0.0,
            multiplier,
            max_interval: max_wait.unwrap_or(Duration::MAX),
            max_elapsed_time: None,
            ..Default::default()
        };

        Self {
            initial_wait,
            backoff,
        }
    }

    pub fn from_config(config: &WallConfig) -> Self {
        Self::new(
            config.retry_initial_wait,
            config.retry_backoff_multiplier,
            config.retry_max_wait,
        )
    }

    /// Wait before the next retry. Call once per failure.
    pub fn next_wait(&mut self) -> Duration {
        // max_elapsed_time is None, so the backoff never gives up; the
        // unwrap_or is unreachable in practice.
        let wait = self
            .backoff
            .next_backoff()
            .unwrap_or(self.initial_wait);
        debug!("Retry wait is {}ms", wait.as_millis());
        wait
    }

    /// Forget accumulated failures. Call on every successful fetch.
    pub fn reset(&mut self) {
        self.backoff.reset();
    }
}
