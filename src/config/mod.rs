//! Fetch configuration.
//!
//! This module handles:
//! - The per-fetch configuration structure and its defaults
//! - Target validation (scheme check)

pub mod validation;

use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::RetryPolicy;
use crate::progress::ProgressFn;

/// Default watchdog duration per connection attempt.
fn default_timeout() -> Duration {
    Duration::from_secs(15)
}

/// Default inclusive bound on redirect hops.
fn default_max_redirects() -> u32 {
    10
}

/// Configuration for one logical fetch.
///
/// Immutable once the fetch begins, except for the header overrides, which
/// the session amends in place as it progresses (range injection on resume).
pub struct FetchConfig {
    /// Target locator. Must carry an `http` or `https` scheme.
    pub url: String,

    /// Destination file. Appended to across attempts; only removed when a
    /// stale complete artifact is detected.
    pub output: PathBuf,

    /// Header overrides merged into every outgoing request,
    /// case-insensitively keyed.
    pub headers: Vec<(String, String)>,

    /// Watchdog duration per connection attempt.
    pub timeout: Duration,

    /// Inclusive bound on redirect hops before failing.
    pub max_redirects: u32,

    /// Retry policy for connection-level transport errors.
    pub retry: RetryPolicy,

    /// Per-chunk progress callback.
    pub on_progress: Option<ProgressFn>,
}

impl FetchConfig {
    /// Create a configuration with default timeout, redirect budget, and
    /// retry policy.
    pub fn new(url: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            output: output.into(),
            headers: Vec::new(),
            timeout: default_timeout(),
            max_redirects: default_max_redirects(),
            retry: RetryPolicy::default(),
            on_progress: None,
        }
    }
}

impl std::fmt::Debug for FetchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchConfig")
            .field("url", &self.url)
            .field("output", &self.output)
            .field("headers", &self.headers)
            .field("timeout", &self.timeout)
            .field("max_redirects", &self.max_redirects)
            .field("retry", &self.retry)
            .field("on_progress", &self.on_progress.is_some())
            .finish()
    }
}
