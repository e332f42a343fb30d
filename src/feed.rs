//! Parsing of the `aweme/v1/feed` metadata response.
//!
//! The feed endpoint returns a top-level `aweme_list` array whose first
//! element is the authoritative record for the requested video. Everything
//! the response can omit is either defaulted or turned into an explicit
//! [`Error::MalformedResponse`]; no raw structural access that can panic.

use reqwest::Client;
use serde::Deserialize;

use crate::error::Error;
use crate::media::{MediaAsset, MusicTrack, VideoDescriptor};

/// Top-level feed response.
#[derive(Debug, Deserialize)]
struct FeedResponse {
    #[serde(default)]
    aweme_list: Vec<Aweme>,
}

/// One video record from the feed.
#[derive(Debug, Deserialize)]
struct Aweme {
    aweme_id: String,
    #[serde(default)]
    desc: String,
    author: Author,
    video: Video,
    #[serde(default)]
    statistics: Statistics,
    music: Music,
}

#[derive(Debug, Deserialize)]
struct Author {
    #[serde(default)]
    nickname: String,
}

#[derive(Debug, Deserialize)]
struct Video {
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    origin_cover: UrlList,
    download_addr: Address,
    play_addr: Address,
}

#[derive(Debug, Default, Deserialize)]
struct Statistics {
    #[serde(default)]
    digg_count: u64,
    #[serde(default)]
    share_count: u64,
    #[serde(default)]
    play_count: u64,
    #[serde(default)]
    comment_count: u64,
}

#[derive(Debug, Deserialize)]
struct Music {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    play_url: Address,
}

/// An addressable media resource as the API reports it.
#[derive(Debug, Default, Deserialize)]
struct Address {
    #[serde(default)]
    uri: String,
    #[serde(default)]
    url_list: Vec<String>,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    data_size: u64,
}

#[derive(Debug, Default, Deserialize)]
struct UrlList {
    #[serde(default)]
    url_list: Vec<String>,
}

/// Parse a feed body and map its first record into a descriptor whose
/// assets are bound to `http`.
pub(crate) fn descriptor_from_body(body: &str, http: &Client) -> Result<VideoDescriptor, Error> {
    let aweme = first_aweme(body)?;

    let url = format!(
        "https://www.tiktok.com/@{}/video/{}",
        aweme.author.nickname, aweme.aweme_id
    );
    let preview_image_url = aweme
        .video
        .origin_cover
        .url_list
        .into_iter()
        .next()
        .ok_or_else(|| Error::MalformedResponse("video.origin_cover has no URLs".to_string()))?;

    let video_watermark = asset(http, aweme.video.download_addr, "video.download_addr")?;
    let video_no_watermark = asset(http, aweme.video.play_addr, "video.play_addr")?;
    let music_asset = asset(http, aweme.music.play_url, "music.play_url")?;

    Ok(VideoDescriptor {
        id: aweme.aweme_id,
        url,
        description: aweme.desc,
        author: aweme.author.nickname,
        width: aweme.video.width,
        height: aweme.video.height,
        likes: aweme.statistics.digg_count,
        shares: aweme.statistics.share_count,
        play_count: aweme.statistics.play_count,
        comments: aweme.statistics.comment_count,
        preview_image_url,
        video_watermark,
        video_no_watermark,
        music: MusicTrack {
            id: aweme.music.id,
            name: aweme.music.title,
            author: aweme.music.author,
            asset: music_asset,
        },
    })
}

fn first_aweme(body: &str) -> Result<Aweme, Error> {
    let response: FeedResponse =
        serde_json::from_str(body).map_err(|e| Error::MalformedResponse(e.to_string()))?;

    response
        .aweme_list
        .into_iter()
        .next()
        .ok_or_else(|| Error::MalformedResponse("aweme_list is missing or empty".to_string()))
}

/// Wrap one raw address into an asset bound to its first URL.
fn asset(http: &Client, address: Address, field: &str) -> Result<MediaAsset, Error> {
    let url = address
        .url_list
        .into_iter()
        .next()
        .ok_or_else(|| Error::MalformedResponse(format!("{field} has no URLs")))?;

    Ok(MediaAsset::new(
        http.clone(),
        address.uri,
        url,
        address.width,
        address.height,
        address.data_size,
    ))
}
