//! Retry policy for connection-level transport errors.

use std::cmp::min;
use std::time::Duration;

/// Backoff policy applied when the transport reports a connection-level
/// error (DNS, connect, reset) before response headers arrive.
///
/// Timeouts are deliberately outside its scope: a watchdog expiry is
/// terminal for the session.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    /// Consecutive failed attempts tolerated before giving up.
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            max_delay,
        }
    }

    /// Retry every transport error indefinitely, with backoff.
    pub fn unlimited() -> Self {
        Self {
            max_retries: u32::MAX,
            ..Self::default()
        }
    }

    /// Whether a further attempt is allowed after `attempt` consecutive
    /// failures.
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_retries
    }

    /// Exponential backoff delay before retry number `attempt` (1-based),
    /// capped at `max_delay`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }

        let exponent = min(attempt.saturating_sub(1), 31);
        let exponential = self.base_delay.saturating_mul(2_u32.pow(exponent));
        min(exponential, self.max_delay)
    }
}
