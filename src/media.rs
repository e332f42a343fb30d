//! Immutable descriptors for a fetched video and its downloadable assets.

use reqwest::Client;

use crate::download::{self, DownloadProgress};
use crate::error::Error;

/// One downloadable resource: a video rendition or the music track.
///
/// The URL is captured when the descriptor is built and never changes;
/// downloading twice fetches the same resource twice. There is no shared
/// state between the assets of a descriptor beyond the HTTP connection
/// pool.
#[derive(Debug, Clone)]
pub struct MediaAsset {
    /// Opaque content identifier as reported by the API.
    pub uri: String,
    /// Retrievable URL of the resource.
    pub url: String,
    /// Pixel width; zero for audio.
    pub width: u32,
    /// Pixel height; zero for audio.
    pub height: u32,
    /// Byte size as declared by the API, not verified against the actual
    /// download.
    pub size: u64,
    http: Client,
}

impl MediaAsset {
    pub(crate) fn new(
        http: Client,
        uri: String,
        url: String,
        width: u32,
        height: u32,
        size: u64,
    ) -> Self {
        Self {
            uri,
            url,
            width,
            height,
            size,
            http,
        }
    }

    /// Download the full resource into memory.
    ///
    /// No timeout is enforced; a stalled connection hangs until the caller
    /// drops the future, which aborts the underlying connection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] on any connection-level failure.
    pub async fn download(&self) -> Result<Vec<u8>, Error> {
        download::fetch_bytes(&self.http, &self.url, None).await
    }

    /// Download the full resource, reporting progress after every received
    /// chunk.
    ///
    /// The callback runs synchronously on the task driving the download and
    /// must not block for long periods, as doing so stalls consumption of
    /// further chunks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] on any connection-level failure.
    pub async fn download_with_progress<F>(&self, mut on_progress: F) -> Result<Vec<u8>, Error>
    where
        F: FnMut(&DownloadProgress),
    {
        download::fetch_bytes(&self.http, &self.url, Some(&mut on_progress)).await
    }
}

/// The audio track attached to a video.
#[derive(Debug, Clone)]
pub struct MusicTrack {
    /// Numeric music identifier.
    pub id: i64,
    /// Track title.
    pub name: String,
    /// Performing author as reported by the API.
    pub author: String,
    /// The downloadable audio asset.
    pub asset: MediaAsset,
}

/// Immutable snapshot of one video's metadata at fetch time.
///
/// Created once per [`fetch_video`](crate::TikTokClient::fetch_video) call
/// and never mutated; there is no cache behind it.
#[derive(Debug, Clone)]
pub struct VideoDescriptor {
    /// Numeric video identifier.
    pub id: String,
    /// Canonical URL of the video page.
    pub url: String,
    /// Caption text.
    pub description: String,
    /// Author display name.
    pub author: String,
    /// Pixel width of the video.
    pub width: u32,
    /// Pixel height of the video.
    pub height: u32,
    /// Like count.
    pub likes: u64,
    /// Share count.
    pub shares: u64,
    /// Play count.
    pub play_count: u64,
    /// Comment count.
    pub comments: u64,
    /// Preview image of the video.
    pub preview_image_url: String,
    /// Default rendition with the embedded watermark overlay.
    pub video_watermark: MediaAsset,
    /// Rendition without the watermark overlay.
    pub video_no_watermark: MediaAsset,
    /// Attached audio track.
    pub music: MusicTrack,
}

impl VideoDescriptor {
    /// Download the watermark-free rendition, or the watermarked one when
    /// `prefer_watermark` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] on any connection-level failure.
    pub async fn download(&self, prefer_watermark: bool) -> Result<Vec<u8>, Error> {
        self.rendition(prefer_watermark).download().await
    }

    /// Download one of the two video renditions, forwarding the progress
    /// callback unchanged to the asset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] on any connection-level failure.
    pub async fn download_with_progress<F>(
        &self,
        prefer_watermark: bool,
        on_progress: F,
    ) -> Result<Vec<u8>, Error>
    where
        F: FnMut(&DownloadProgress),
    {
        self.rendition(prefer_watermark)
            .download_with_progress(on_progress)
            .await
    }

    fn rendition(&self, prefer_watermark: bool) -> &MediaAsset {
        if prefer_watermark {
            &self.video_watermark
        } else {
            &self.video_no_watermark
        }
    }
}
