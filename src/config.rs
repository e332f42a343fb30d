//! Client configuration.

use crate::constants::{BROWSER_USER_AGENT, DEFAULT_API_HOST};

/// Configuration injected into a [`TikTokClient`](crate::TikTokClient) at
/// construction.
///
/// There are no configuration files or environment variables behind this;
/// the defaults point at the production endpoints, and tests substitute
/// `api_host` with a mock server URI.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the feed API, without a trailing slash.
    pub api_host: String,
    /// User agent attached to every request the client makes.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }
}
