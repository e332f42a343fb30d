//! TikTok video fetching library.
//!
//! Resolves a short or canonical TikTok video URL into a stable numeric
//! identifier, fetches the video's metadata from the undocumented mobile
//! feed API, and exposes lazily-evaluated download handles for the
//! watermarked video, the watermark-free video, and the music track.
//!
//! ```no_run
//! # async fn run() -> Result<(), tiktok_fetch::Error> {
//! let client = tiktok_fetch::TikTokClient::new()?;
//!
//! let video = client
//!     .fetch_video("https://vm.tiktok.com/ZMabcdefg/")
//!     .await?;
//! println!("{} by {} ({} plays)", video.description, video.author, video.play_count);
//!
//! // Watermark-free rendition, with progress reporting
//! let bytes = video
//!     .download_with_progress(false, |progress| {
//!         eprintln!("{:.1}%", progress.percent());
//!     })
//!     .await?;
//! # let _ = bytes;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod download;
pub mod error;
mod feed;
pub mod media;
mod resolve;

pub use client::TikTokClient;
pub use config::ClientConfig;
pub use download::DownloadProgress;
pub use error::Error;
pub use media::{MediaAsset, MusicTrack, VideoDescriptor};
