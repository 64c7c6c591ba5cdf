//! Download orchestrator: the fetch lifecycle state machine.
//!
//! One logical fetch runs as an explicit loop over connection attempts.
//! Each pass issues a request under the watchdog, then decides between
//! redirect-follow, resume, stream, and retry until the outcome is
//! produced. Re-entering the request state always drops the previous
//! response first, so at most one exchange is in flight and at most one
//! append writer is open at any time.

use std::path::PathBuf;

use futures::StreamExt;
use reqwest::header;
use reqwest::{redirect, Client};
use tokio::io::AsyncWriteExt;
use tokio::time::sleep;
use url::Url;

use crate::config::validation::validate_target;
use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::fetch::headers::{build_headers, expected_total, range_from};
use crate::fetch::session::FetchSession;
use crate::fetch::watchdog::Watchdog;
use crate::fs;

/// Outcome of a completed fetch.
#[derive(Debug)]
pub struct Fetched {
    /// Final target after redirects.
    pub url: Url,
    /// Destination file.
    pub output: PathBuf,
    /// On-disk size at completion.
    pub size: u64,
    /// Bytes this session streamed to disk, across all of its attempts.
    /// Excludes bytes already present before the session started.
    pub bytes_streamed: u64,
    /// Expected total disclosed by the server, if any.
    pub total: Option<u64>,
    /// Redirect hops taken.
    pub redirects: u32,
    /// Whether any attempt continued from a pre-existing partial file.
    pub resumed: bool,
}

/// Drives one logical fetch to completion.
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
    session: FetchSession,
}

impl Fetcher {
    /// Validate the target and prepare the transport client.
    ///
    /// Fails without any network activity when the target has a missing or
    /// unrecognized scheme. Redirects are handled by the orchestrator, so
    /// the client's own following is disabled; certificate verification is
    /// also disabled, matching the original transfer behavior.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let origin = validate_target(&config.url)?;
        let headers = build_headers(&config.headers, &origin)?;

        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self {
            client,
            config,
            session: FetchSession::new(origin, headers),
        })
    }

    /// Run the fetch to its single outcome.
    pub async fn fetch(mut self) -> Result<Fetched> {
        let watchdog = Watchdog::new(self.config.timeout);
        let mut attempt = 0u32;

        loop {
            // REQUESTING: watchdog armed around the header wait only.
            let request = self
                .client
                .get(self.session.url.clone())
                .headers(self.session.headers.clone());

            let response = match watchdog.guard(request.send()).await {
                Err(_expired) => {
                    tracing::warn!(url = %self.session.url, "watchdog expired before response");
                    return Err(Error::Timeout);
                }
                Ok(Err(e)) => {
                    if !self.config.retry.should_retry(attempt) {
                        return Err(Error::Transport(e));
                    }
                    attempt += 1;
                    let delay = self.config.retry.delay_for_attempt(attempt);
                    tracing::warn!(
                        error = %e,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "transport error, retrying same target"
                    );
                    sleep(delay).await;
                    continue;
                }
                Ok(Ok(response)) => response,
            };
            attempt = 0;

            // RESPONSE-EVALUATION / REDIRECTING
            if response.status().is_redirection() {
                if let Some(location) = response
                    .headers()
                    .get(header::LOCATION)
                    .and_then(|v| v.to_str().ok())
                {
                    if self.session.redirects >= self.config.max_redirects {
                        tracing::warn!(
                            limit = self.config.max_redirects,
                            "redirect budget exhausted"
                        );
                        return Err(Error::TooManyRedirects {
                            limit: self.config.max_redirects,
                        });
                    }
                    let next = self
                        .session
                        .url
                        .join(location)
                        .map_err(|_| Error::InvalidUrl)?;
                    self.session.redirects += 1;
                    tracing::debug!(
                        to = %next,
                        hop = self.session.redirects,
                        "following redirect"
                    );
                    self.session.url = next;
                    continue;
                }
            }

            // BREAKPOINT-CHECK
            self.session.total = expected_total(response.headers());

            if !self.session.resume_lock {
                if let Some(existing) = fs::file_size(&self.config.output).await? {
                    match self.session.total {
                        Some(total) if existing >= total => {
                            tracing::debug!(existing, total, "stale artifact, starting fresh");
                            fs::remove_stale(&self.config.output).await?;
                        }
                        _ => {
                            tracing::debug!(offset = existing, "resuming from breakpoint");
                            self.session
                                .headers
                                .insert(header::RANGE, range_from(existing));
                            self.session.resume_lock = true;
                            self.session.resumed = true;
                            continue;
                        }
                    }
                }
            }

            // STREAMING
            let mut written = fs::file_size(&self.config.output).await?.unwrap_or(0);
            let mut writer = fs::open_append(&self.config.output).await?;
            let mut stream = response.bytes_stream();

            while let Some(item) = stream.next().await {
                let chunk = match item {
                    Ok(chunk) => chunk,
                    Err(e) => {
                        // premature end; the size check below decides what happens
                        tracing::warn!(error = %e, "body stream interrupted");
                        break;
                    }
                };
                writer.write_all(&chunk).await?;
                written += chunk.len() as u64;
                self.session.bytes_streamed += chunk.len() as u64;

                if let Some(on_progress) = &self.config.on_progress {
                    on_progress(chunk.len() as u64, written, self.session.total);
                }
            }

            // VERIFYING: explicit flush acknowledgment, then re-stat.
            writer.flush().await?;
            writer.sync_all().await?;
            drop(writer);

            let size = fs::file_size(&self.config.output).await?.unwrap_or(0);
            if let Some(total) = self.session.total {
                if size < total {
                    tracing::debug!(size, total, "short write, resuming from new offset");
                    self.session.resume_lock = false;
                    continue;
                }
            }

            tracing::info!(
                size,
                url = %self.session.url,
                output = %self.config.output.display(),
                "fetch complete"
            );
            return Ok(Fetched {
                url: self.session.url,
                output: self.config.output,
                size,
                bytes_streamed: self.session.bytes_streamed,
                total: self.session.total,
                redirects: self.session.redirects,
                resumed: self.session.resumed,
            });
        }
    }
}

/// Fetch `config.url` into `config.output`, continuing from any partial
/// file already on disk.
pub async fn fetch(config: FetchConfig) -> Result<Fetched> {
    Fetcher::new(config)?.fetch().await
}
