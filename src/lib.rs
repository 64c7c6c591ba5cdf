//! refetch - resumable single-resource HTTP(S) fetcher
//!
//! This library fetches one resource over HTTP or HTTPS and persists it to
//! local storage, tolerating redirects, transient network failures, and
//! interrupted transfers.
//!
//! # Features
//!
//! - Breakpoint continuation: a partial file left by a previous attempt is
//!   continued from its byte offset with a range request, never rewritten
//! - Bounded redirect following
//! - Per-attempt watchdog that aborts stalled connections
//! - Capped retry with backoff on connection-level errors
//! - Post-write size verification with automatic re-resume on short writes
//! - Per-chunk progress reporting
//!
//! # Example
//!
//! ```no_run
//! use refetch::{fetch, FetchConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = FetchConfig::new("https://example.com/archive.zip", "./archive.zip");
//!     config.on_progress = Some(std::sync::Arc::new(|_len, written, total| {
//!         if let Some(total) = total {
//!             println!("{}/{}", written, total);
//!         }
//!     }));
//!
//!     let fetched = fetch(config).await?;
//!     println!("saved {} bytes to {}", fetched.size, fetched.output.display());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod fs;
pub mod output;
pub mod progress;

// Re-exports for convenience
pub use config::FetchConfig;
pub use error::{Error, Result};
pub use fetch::{fetch, Fetched, Fetcher, RetryPolicy};
pub use progress::ProgressFn;
