//! Buffered streaming download with synchronous progress reporting.

use reqwest::Client;
use tracing::debug;

use crate::error::Error;

/// Progress of one in-flight download.
///
/// Produced after every received chunk; invocations of the progress
/// callback are strictly ordered between successive chunk arrivals, never
/// reordered or batched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadProgress {
    /// Bytes accumulated so far.
    pub downloaded: u64,
    /// Total bytes declared by the `content-length` response header; zero
    /// when the server did not report a length.
    pub total: u64,
}

impl DownloadProgress {
    /// Completion percentage in `0.0..=100.0`.
    ///
    /// Returns `0.0` when the total is unknown (`total == 0`); check
    /// `total` to distinguish "just started" from "no declared length".
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.downloaded as f64 / self.total as f64 * 100.0
        }
    }
}

/// Fetch a URL into a single owned buffer.
///
/// The callback, when present, runs synchronously on the task driving the
/// byte accumulation after every chunk. Connection errors and non-success
/// statuses propagate as [`Error::Transport`]; there are no retries and no
/// timeout.
pub(crate) async fn fetch_bytes(
    http: &Client,
    url: &str,
    mut on_progress: Option<&mut dyn FnMut(&DownloadProgress)>,
) -> Result<Vec<u8>, Error> {
    let mut response = http.get(url).send().await?.error_for_status()?;
    let total = response.content_length().unwrap_or(0);

    let mut buffer = Vec::with_capacity(usize::try_from(total).unwrap_or(0));
    while let Some(chunk) = response.chunk().await? {
        buffer.extend_from_slice(&chunk);
        if let Some(callback) = on_progress.as_mut() {
            callback(&DownloadProgress {
                downloaded: buffer.len() as u64,
                total,
            });
        }
    }

    debug!(url, bytes = buffer.len(), "download complete");
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_known_total() {
        let progress = DownloadProgress {
            downloaded: 512,
            total: 1024,
        };
        assert!((progress.percent() - 50.0).abs() < f64::EPSILON);

        let done = DownloadProgress {
            downloaded: 1024,
            total: 1024,
        };
        assert!((done.percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percent_of_unknown_total_is_zero() {
        let progress = DownloadProgress {
            downloaded: 4096,
            total: 0,
        };
        assert!(progress.percent().abs() < f64::EPSILON);
    }
}
