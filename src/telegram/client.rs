use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, StatusCode};
use scraper::Html;
use thiserror::Error;
use tracing::{debug, info};

use super::extract::extract_post;
use super::fragment::split_fragments;
use super::models::{normalize_channel, ChannelPost};
use crate::config::Config;
use crate::constants::{
    BROWSER_ACCEPT, BROWSER_ACCEPT_LANGUAGE, BROWSER_USER_AGENT, DEFAULT_POST_LIMIT,
};

/// Failure to retrieve a channel preview page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Scraper for public channel preview pages (`<base>/s/<channel>`).
#[derive(Debug, Clone)]
pub struct ChannelClient {
    client: Client,
    base_url: String,
}

impl ChannelClient {
    /// Create a client against `base_url` (normally `https://t.me`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        Self::new(&config.telegram_base_url, config.http_timeout)
    }

    /// URL of the preview page for `channel`.
    #[must_use]
    pub fn preview_url(&self, channel: &str) -> String {
        format!("{}/s/{}", self.base_url, normalize_channel(channel))
    }

    /// Fetch the preview page and return up to `limit` posts, newest first.
    ///
    /// An empty list means the page held no recognizable posts.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails or the response status is
    /// not a success.
    pub async fn fetch_posts(
        &self,
        channel: &str,
        limit: usize,
    ) -> Result<Vec<ChannelPost>, FetchError> {
        let url = self.preview_url(channel);
        debug!(url = %url, "Fetching channel preview page");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, BROWSER_ACCEPT)
            .header(ACCEPT_LANGUAGE, BROWSER_ACCEPT_LANGUAGE)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let html = response.text().await.map_err(|source| FetchError::Body {
            url: url.clone(),
            source,
        })?;

        let posts = parse_channel_page(&html, &self.base_url, limit, Utc::now());
        info!(
            channel = normalize_channel(channel),
            count = posts.len(),
            "Extracted channel posts"
        );
        Ok(posts)
    }
}

/// Extract posts from a preview page.
///
/// Fragments are processed independently; one that cannot be identified is
/// skipped without affecting the rest. The result is sorted newest first and
/// truncated to `limit`, which never exceeds [`DEFAULT_POST_LIMIT`]. Post
/// links are built under `link_base`.
#[must_use]
pub fn parse_channel_page(
    html: &str,
    link_base: &str,
    limit: usize,
    fetched_at: DateTime<Utc>,
) -> Vec<ChannelPost> {
    let document = Html::parse_document(html);
    let fragments = split_fragments(&document);

    let mut seen_ids = HashSet::new();
    let mut posts: Vec<ChannelPost> = fragments
        .iter()
        .filter_map(|fragment| extract_post(fragment, link_base, fetched_at))
        .filter(|post| seen_ids.insert(post.id.clone()))
        .collect();

    debug!(
        fragments = fragments.len(),
        posts = posts.len(),
        "Parsed channel preview page"
    );

    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    posts.truncate(limit.min(DEFAULT_POST_LIMIT));
    posts
}
