//! Shared constants used across the client.

/// User agent string sent with every HTTP request.
///
/// This is a realistic browser user agent that is indistinguishable from a real browser;
/// the feed endpoint rejects requests that do not carry a plausible one.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default host of the undocumented mobile feed API.
pub const DEFAULT_API_HOST: &str = "https://api16-normal-v4.tiktokv.com";
