//! Target validation logic.

use url::Url;

use crate::error::{Error, Result};

/// Parse and validate the target locator.
///
/// Only `http` and `https` targets are accepted; anything else, including
/// strings that do not parse as absolute URLs at all, fails before any
/// network activity.
pub fn validate_target(target: &str) -> Result<Url> {
    let url = Url::parse(target).map_err(|_| Error::InvalidUrl)?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(Error::InvalidUrl),
    }
}
