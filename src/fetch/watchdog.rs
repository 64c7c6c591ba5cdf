//! Watchdog timer guarding each connection attempt.

use std::future::Future;
use std::time::Duration;

/// Single-shot watchdog for the header-wait phase of a request.
///
/// A fresh timer is armed by every [`Watchdog::guard`] call and disarmed
/// the moment the guarded future resolves, so only the current attempt can
/// trip it. On expiry the guarded future is dropped, which aborts the
/// in-flight request. Body streaming is not covered: once a response has
/// been accepted the size verification step owns failure detection.
#[derive(Clone, Copy, Debug)]
pub struct Watchdog {
    timeout: Duration,
}

/// Marker returned when the watchdog fired before a response was accepted.
#[derive(Debug, PartialEq, Eq)]
pub struct Expired;

impl Watchdog {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Run `fut` under this watchdog.
    pub async fn guard<F>(&self, fut: F) -> Result<F::Output, Expired>
    where
        F: Future,
    {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| Expired)
    }
}
