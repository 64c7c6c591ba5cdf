//! Per-fetch mutable session state.

use reqwest::header::HeaderMap;
use url::Url;

/// Mutable state of one fetch session.
///
/// Created when the operation starts and dropped once the outcome is
/// produced. The partial output file is the only state that outlives it.
#[derive(Debug)]
pub(crate) struct FetchSession {
    /// Current target; changes as redirects are followed.
    pub url: Url,

    /// Original target, kept for `Referer` derivation.
    pub origin: Url,

    /// Outgoing headers; amended in place when a range is injected.
    pub headers: HeaderMap,

    /// Cumulative redirect hops taken.
    pub redirects: u32,

    /// Set before a resumed request is issued, cleared only after its
    /// response has been fully processed. Prevents re-entrant breakpoint
    /// detection on the same attempt.
    pub resume_lock: bool,

    /// Expected total size, unknown until a response discloses it.
    pub total: Option<u64>,

    /// Whether any attempt continued from a pre-existing partial file.
    pub resumed: bool,

    /// Bytes streamed to disk by this session, across all attempts.
    pub bytes_streamed: u64,
}

impl FetchSession {
    pub fn new(origin: Url, headers: HeaderMap) -> Self {
        Self {
            url: origin.clone(),
            origin,
            headers,
            redirects: 0,
            resume_lock: false,
            total: None,
            resumed: false,
            bytes_streamed: 0,
        }
    }
}
