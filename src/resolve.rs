//! URL shape classification and video identifier extraction.
//!
//! References arrive in three shapes: a bare numeric identifier, a short
//! link that redirects to the canonical page, or the canonical
//! `/@user/video/{id}` URL itself. Everything here is purely syntactic;
//! only short links cost a network round trip, and that happens in the
//! client, not here.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Short-link shapes that must be resolved through a redirect.
static SHORT_LINK_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Two-letter subdomain hosts: vm.tiktok.com, vt.tiktok.com
        Regex::new(r"^https?://v[mt]\.tiktok\.com/").unwrap(),
        // The /t/ path form on the canonical subdomains
        Regex::new(r"^https?://(www\.|m\.)?tiktok\.com/t/").unwrap(),
    ]
});

static BARE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

static VIDEO_PATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/video/(\d+)").unwrap());

/// How a reference string should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reference {
    /// Already a numeric identifier; nothing to resolve.
    Id,
    /// A short link whose redirect target carries the identifier.
    ShortLink,
    /// Anything else; usable only if it carries `/video/{id}` itself.
    Other,
}

pub(crate) fn classify(reference: &str) -> Reference {
    if BARE_ID.is_match(reference) {
        Reference::Id
    } else if SHORT_LINK_PATTERNS.iter().any(|p| p.is_match(reference)) {
        Reference::ShortLink
    } else {
        Reference::Other
    }
}

/// Extract the numeric video identifier from a canonical URL.
///
/// Canonical video URLs have formats like:
/// - `https://www.tiktok.com/@user/video/1234567890123456789`
/// - `https://tiktok.com/@user/video/1234567890123456789?is_copy_url=1`
pub(crate) fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_PATH
        .captures(url)
        .map(|captures| captures[1].to_string())
}

/// Turn a `Location` header value into an absolute URL.
///
/// Location is allowed to be relative; a relative value is joined against
/// the URL that was probed.
pub(crate) fn absolutize_location(probed_url: &str, location: &str) -> Option<String> {
    if let Ok(absolute) = Url::parse(location) {
        return Some(absolute.to_string());
    }
    let base = Url::parse(probed_url).ok()?;
    base.join(location).ok().map(|joined| joined.to_string())
}
