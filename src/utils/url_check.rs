//! Surface check for redirect targets.
//!
//! Targets are not parsed. A URL is accepted when it starts with an `http://`
//! or `https://` scheme prefix (scheme compared case-insensitively), has
//! something after it, and contains no control characters. The last rule keeps
//! every stored target usable as a `Location` header.

use std::borrow::Cow;

use validator::ValidationError;

const SCHEMES: &[&str] = &["http://", "https://"];

/// Message shown for a rejected redirect target.
pub const INVALID_URL_MESSAGE: &str = "Invalid URL: must start with http:// or https://";

/// Returns true if `url` looks like an HTTP(S) URL.
pub fn is_http_url(url: &str) -> bool {
    let has_scheme = SCHEMES.iter().any(|scheme| {
        url.len() > scheme.len()
            && url
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    });

    has_scheme && !url.bytes().any(is_control)
}

fn is_control(b: u8) -> bool {
    b < 0x20 || b == 0x7f
}

/// `validator` hook wrapping [`is_http_url`].
pub fn validate_http_url(url: &str) -> Result<(), ValidationError> {
    if is_http_url(url) {
        Ok(())
    } else {
        Err(ValidationError::new("http_url").with_message(Cow::Borrowed(INVALID_URL_MESSAGE)))
    }
}
