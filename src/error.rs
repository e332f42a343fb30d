//! Error taxonomy for the client.

use thiserror::Error;

/// Errors surfaced by [`TikTokClient`](crate::TikTokClient) operations.
///
/// Every variant is terminal for the call that produced it; nothing in this
/// crate retries.
#[derive(Debug, Error)]
pub enum Error {
    /// The input matched neither a bare identifier, a short-link shape, nor
    /// a canonical `/video/{id}` URL.
    #[error("not a recognized TikTok video URL: {0}")]
    InvalidVideoUrl(String),

    /// A short link was probed but the response carried no usable
    /// `Location` header.
    #[error("short link did not redirect: {0}")]
    UnresolvedRedirect(String),

    /// The feed endpoint returned a body that could not be interpreted as a
    /// video record.
    #[error("malformed feed response: {0}")]
    MalformedResponse(String),

    /// A connection-level failure in the underlying HTTP client.
    #[error("transport failure")]
    Transport(#[from] reqwest::Error),
}
