//! Command-line argument definitions using clap.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::FetchConfig;
use crate::error::{Error, Result};

/// Resumable HTTP(S) fetcher CLI.
#[derive(Parser, Debug)]
#[command(
    name = "refetch",
    version,
    about = "Fetch a single resource over HTTP(S), resuming interrupted transfers",
    long_about = "Fetches one resource and writes it to a local file.\n\n\
                  If a partial file from a previous attempt exists, the transfer\n\
                  continues from its byte offset instead of restarting."
)]
pub struct Args {
    /// Target URL (http or https).
    pub url: String,

    /// Destination file path.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Extra request header, as 'Name: value'. Repeatable.
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Watchdog timeout per connection attempt, in milliseconds.
    #[arg(long, default_value_t = 15_000)]
    pub timeout_ms: u64,

    /// Maximum redirect hops before failing.
    #[arg(long, default_value_t = 10)]
    pub max_redirects: u32,

    /// Retry attempts on connection-level errors.
    #[arg(long)]
    pub retries: Option<u32>,

    /// Base delay between retries, in milliseconds (doubles per attempt).
    #[arg(long)]
    pub retry_delay_ms: Option<u64>,

    /// Hide the progress bar.
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Turn parsed arguments into a fetch configuration.
    pub fn into_config(self) -> Result<FetchConfig> {
        let mut config = FetchConfig::new(self.url, self.output);
        config.timeout = Duration::from_millis(self.timeout_ms);
        config.max_redirects = self.max_redirects;

        if let Some(retries) = self.retries {
            config.retry.max_retries = retries;
        }
        if let Some(delay) = self.retry_delay_ms {
            config.retry.base_delay = Duration::from_millis(delay);
        }

        for raw in &self.headers {
            config.headers.push(parse_header(raw)?);
        }

        Ok(config)
    }
}

/// Split a 'Name: value' argument into a header pair.
pub fn parse_header(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| Error::Header(raw.to_string()))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Header(raw.to_string()));
    }

    Ok((name.to_string(), value.trim().to_string()))
}
