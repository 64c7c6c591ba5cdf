//! Request-header assembly and response-header interpretation.

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::error::{Error, Result};

/// Fixed user agent presented on every request.
pub const MOBILE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 11_0 like Mac OS X) AppleWebKit/604.1.38 (KHTML, like Gecko) Version/11.0 Mobile/15A372 Safari/604.1";

/// Build the header map for a session.
///
/// Caller overrides go in first; the derived `Referer` and the fixed user
/// agent are then inserted over them. `HeaderMap` keys are
/// case-insensitive, so overrides collapse regardless of the caller's
/// spelling.
pub fn build_headers(overrides: &[(String, String)], origin: &Url) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    for (key, value) in overrides {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| Error::Header(key.clone()))?;
        let value = HeaderValue::from_str(value).map_err(|_| Error::Header(key.clone()))?;
        headers.insert(name, value);
    }

    headers.insert(header::REFERER, referer_for(origin)?);
    headers.insert(header::USER_AGENT, HeaderValue::from_static(MOBILE_UA));

    Ok(headers)
}

/// `scheme://host` of the original target.
fn referer_for(origin: &Url) -> Result<HeaderValue> {
    let referer = format!("{}://{}", origin.scheme(), origin.host_str().unwrap_or(""));
    HeaderValue::from_str(&referer).map_err(|_| Error::InvalidUrl)
}

/// Expected total size of the resource, derived from response headers.
///
/// A `content-range` total (the value after the trailing slash) takes
/// precedence; without one, `content-length` is used. Returns `None` when
/// neither discloses a size, and also for a `content-range` of `*/...`
/// form with an unknown total. Never falls back from an unparseable
/// `content-range` to `content-length`: on a partial response the latter
/// is the remainder length, not the resource size.
pub fn expected_total(headers: &HeaderMap) -> Option<u64> {
    if let Some(range) = headers
        .get(header::CONTENT_RANGE)
        .and_then(|v| v.to_str().ok())
    {
        return range.rsplit('/').next()?.trim().parse().ok();
    }

    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

/// Range header value requesting bytes from `offset` onward.
pub fn range_from(offset: u64) -> HeaderValue {
    HeaderValue::from_str(&format!("bytes={}-", offset))
        .expect("range header value is always valid ASCII")
}
