//! The client: URL resolution, metadata fetch, descriptor assembly.

use reqwest::{header, redirect, Client};
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::Error;
use crate::feed;
use crate::media::VideoDescriptor;
use crate::resolve::{self, Reference};

/// Client for resolving and fetching TikTok videos.
///
/// Stateless between calls: no cache of resolved identifiers or fetched
/// metadata. Cloning is cheap and clones share the underlying connection
/// pools.
#[derive(Debug, Clone)]
pub struct TikTokClient {
    /// Used for the feed endpoint and asset downloads; follows redirects.
    http: Client,
    /// Redirect-disabled client used to read `Location` off short links.
    probe: Client,
    config: ClientConfig,
}

impl TikTokClient {
    /// Build a client against the production endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(ClientConfig::default())
    }

    /// Build a client with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        let probe = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            http,
            probe,
            config,
        })
    }

    /// Resolve a video reference into its numeric identifier.
    ///
    /// A bare identifier is returned unchanged and a canonical URL is
    /// parsed in place, both without touching the network; a short link
    /// costs exactly one redirect-probe request.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVideoUrl`] when the input matches no recognized
    /// shape, [`Error::UnresolvedRedirect`] when a short link does not
    /// redirect, [`Error::Transport`] when the probe request fails.
    pub async fn resolve_video_id(&self, reference: &str) -> Result<String, Error> {
        let full_url = match resolve::classify(reference) {
            Reference::Id => return Ok(reference.to_string()),
            Reference::ShortLink => {
                let target = self.follow_short_link(reference).await?;
                debug!(short_link = reference, target = %target, "resolved short link");
                target
            }
            Reference::Other => reference.to_string(),
        };

        resolve::extract_video_id(&full_url).ok_or_else(|| Error::InvalidVideoUrl(full_url))
    }

    /// Fetch the metadata document for a reference and assemble the
    /// descriptor with its three downloadable assets.
    ///
    /// # Errors
    ///
    /// Everything [`resolve_video_id`](Self::resolve_video_id) can return,
    /// plus [`Error::MalformedResponse`] when the feed body cannot be
    /// interpreted and [`Error::Transport`] when the fetch itself fails.
    pub async fn fetch_video(&self, reference: &str) -> Result<VideoDescriptor, Error> {
        let video_id = self.resolve_video_id(reference).await?;
        let feed_url = format!(
            "{}/aweme/v1/feed/?aweme_id={}",
            self.config.api_host, video_id
        );

        let body = self.http.get(&feed_url).send().await?.text().await?;
        let descriptor = feed::descriptor_from_body(&body, &self.http)?;

        info!(video_id = %descriptor.id, author = %descriptor.author, "fetched video metadata");
        Ok(descriptor)
    }

    /// Issue the single redirect-probe GET and return the absolute
    /// `Location` target.
    async fn follow_short_link(&self, short_url: &str) -> Result<String, Error> {
        let response = self.probe.get(short_url).send().await?;

        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|location| resolve::absolutize_location(short_url, location))
            .ok_or_else(|| Error::UnresolvedRedirect(short_url.to_string()))
    }
}
