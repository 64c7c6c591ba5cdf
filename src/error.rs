//! Error types for the refetch crate.

use thiserror::Error;

/// Main error type for fetch operations.
///
/// Exactly one of these is produced per top-level fetch invocation,
/// no matter how many internal retries, redirects, or resumes occurred.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("invalid url")]
    InvalidUrl,

    #[error("invalid header '{0}'")]
    Header(String),

    // Network errors
    /// The watchdog expired before response headers were accepted.
    /// Terminal for the whole session, never retried.
    #[error("connection timeout or networking error")]
    Timeout,

    #[error("redirect budget exhausted after {limit} hops")]
    TooManyRedirects { limit: u32 },

    /// Connection-level failure that survived the retry policy.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes for the CLI binary.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const NETWORK_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
