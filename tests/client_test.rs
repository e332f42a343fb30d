//! Integration tests for the full resolve → fetch → download pipeline
//! against a mocked feed API and CDN.

use serde_json::json;
use tiktok_fetch::{ClientConfig, Error, TikTokClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VIDEO_ID: &str = "7123456789012345678";

/// Create a client whose feed API host points at the mock server.
fn client_for(server: &MockServer) -> TikTokClient {
    TikTokClient::with_config(ClientConfig {
        api_host: server.uri(),
        ..ClientConfig::default()
    })
    .expect("failed to build client")
}

/// Feed response whose asset URLs live under the given CDN base.
fn feed_body(cdn: &str) -> serde_json::Value {
    json!({
        "status_code": 0,
        "aweme_list": [{
            "aweme_id": VIDEO_ID,
            "desc": "cat does a backflip #cat",
            "author": { "nickname": "alice", "unique_id": "alice" },
            "video": {
                "width": 576,
                "height": 1024,
                "origin_cover": { "url_list": [format!("{cdn}/media/cover.jpeg")] },
                "download_addr": {
                    "uri": "v09044g40000watermarked",
                    "url_list": [format!("{cdn}/media/watermark.mp4")],
                    "width": 576,
                    "height": 1024,
                    "data_size": 1_832_041
                },
                "play_addr": {
                    "uri": "v09044g40000clean",
                    "url_list": [format!("{cdn}/media/clean.mp4")],
                    "width": 576,
                    "height": 1024,
                    "data_size": 1_647_210
                }
            },
            "statistics": {
                "digg_count": 4211,
                "share_count": 87,
                "play_count": 52_100,
                "comment_count": 319
            },
            "music": {
                "id": 6_987_654_321_012_345_678_i64,
                "title": "original sound - alice",
                "author": "alice",
                "play_url": {
                    "uri": "music-6987654321012345678",
                    "url_list": [format!("{cdn}/media/sound.mp3")]
                }
            }
        }]
    })
}

async fn mount_feed(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/aweme/v1/feed/"))
        .and(query_param("aweme_id", VIDEO_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_body(&server.uri())))
        .mount(server)
        .await;
}

async fn mount_media(server: &MockServer, file: &str, body: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(format!("/media/{file}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(server)
        .await;
}

/// Deterministic fake media payload, large enough to arrive in several
/// chunks.
fn media_bytes(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(seed)).collect()
}

#[tokio::test]
async fn test_bare_id_resolves_without_any_request() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let id = client.resolve_video_id(VIDEO_ID).await.unwrap();

    assert_eq!(id, VIDEO_ID);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_canonical_url_resolves_without_any_request() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let id = client
        .resolve_video_id("https://www.tiktok.com/@alice/video/7123456789012345678")
        .await
        .unwrap();

    assert_eq!(id, VIDEO_ID);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unrecognized_reference_fails_without_any_request() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .resolve_video_id("https://example.com/not-tiktok")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidVideoUrl(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_video_maps_the_feed_record() {
    let server = MockServer::start().await;
    mount_feed(&server).await;
    let client = client_for(&server);

    let video = client.fetch_video(VIDEO_ID).await.unwrap();

    assert_eq!(video.id, VIDEO_ID);
    assert_eq!(
        video.url,
        "https://www.tiktok.com/@alice/video/7123456789012345678"
    );
    assert_eq!(video.description, "cat does a backflip #cat");
    assert_eq!(video.author, "alice");
    assert_eq!((video.width, video.height), (576, 1024));
    assert_eq!(video.likes, 4211);
    assert_eq!(video.shares, 87);
    assert_eq!(video.play_count, 52_100);
    assert_eq!(video.comments, 319);
    assert_eq!(
        video.preview_image_url,
        format!("{}/media/cover.jpeg", server.uri())
    );

    assert_eq!(video.video_watermark.uri, "v09044g40000watermarked");
    assert_eq!(video.video_watermark.size, 1_832_041);
    assert_eq!(video.video_no_watermark.uri, "v09044g40000clean");
    assert_eq!(video.video_no_watermark.size, 1_647_210);

    assert_eq!(video.music.id, 6_987_654_321_012_345_678);
    assert_eq!(video.music.name, "original sound - alice");
    assert_eq!(video.music.author, "alice");
    assert_eq!(
        video.music.asset.url,
        format!("{}/media/sound.mp3", server.uri())
    );
}

#[tokio::test]
async fn test_fetch_video_with_empty_aweme_list_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/aweme/v1/feed/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "aweme_list": [] })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client.fetch_video(VIDEO_ID).await.unwrap_err();

    assert!(matches!(err, Error::MalformedResponse(_)));
}

#[tokio::test]
async fn test_fetch_video_with_html_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/aweme/v1/feed/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>access denied</html>"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client.fetch_video(VIDEO_ID).await.unwrap_err();

    assert!(matches!(err, Error::MalformedResponse(_)));
}

#[tokio::test]
async fn test_download_accumulates_the_body_and_reports_progress() {
    let server = MockServer::start().await;
    mount_feed(&server).await;
    let clean = media_bytes(300_000, 7);
    mount_media(&server, "clean.mp4", clean.clone()).await;
    let client = client_for(&server);

    let video = client.fetch_video(VIDEO_ID).await.unwrap();
    let mut updates = Vec::new();
    let bytes = video
        .download_with_progress(false, |progress| updates.push(*progress))
        .await
        .unwrap();

    assert_eq!(bytes, clean);

    assert!(!updates.is_empty());
    let total = clean.len() as u64;
    let mut previous = 0;
    for progress in &updates {
        assert_eq!(progress.total, total);
        assert!(progress.downloaded >= previous);
        previous = progress.downloaded;
    }
    let last = updates.last().unwrap();
    assert_eq!(last.downloaded, total);
    assert!((last.percent() - 100.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_download_twice_returns_identical_buffers() {
    let server = MockServer::start().await;
    mount_feed(&server).await;
    let sound = media_bytes(40_000, 13);
    Mock::given(method("GET"))
        .and(path("/media/sound.mp3"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(sound.clone()))
        .expect(2)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let video = client.fetch_video(VIDEO_ID).await.unwrap();
    let first = video.music.asset.download().await.unwrap();
    let second = video.music.asset.download().await.unwrap();

    assert_eq!(first, sound);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_download_picks_the_requested_rendition() {
    let server = MockServer::start().await;
    mount_feed(&server).await;
    let watermarked = media_bytes(20_000, 3);
    let clean = media_bytes(20_000, 5);
    mount_media(&server, "watermark.mp4", watermarked.clone()).await;
    mount_media(&server, "clean.mp4", clean.clone()).await;
    let client = client_for(&server);

    let video = client.fetch_video(VIDEO_ID).await.unwrap();

    assert_eq!(video.download(true).await.unwrap(), watermarked);
    assert_eq!(video.download(false).await.unwrap(), clean);
}

#[tokio::test]
async fn test_download_failure_is_a_transport_error() {
    let server = MockServer::start().await;
    mount_feed(&server).await;
    let client = client_for(&server);

    let video = client.fetch_video(VIDEO_ID).await.unwrap();
    // Nothing mounted at the asset path; the mock server answers 404.
    let err = video.download(false).await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}
