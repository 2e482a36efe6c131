use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::types::{ChannelVideo, SearchResponse, VideosResponse};
use crate::config::Config;
use crate::constants::{BROWSER_USER_AGENT, DEFAULT_YOUTUBE_CHANNEL_ID, YOUTUBE_MAX_RESULTS};
use crate::telegram::normalize_channel;

/// Failure talking to the YouTube Data API.
///
/// Messages name the endpoint, never the full URL, since the URL carries the
/// API key.
#[derive(Debug, Error)]
pub enum VideoError {
    #[error("request to YouTube {endpoint} endpoint failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("YouTube {endpoint} endpoint returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },
    #[error("failed to decode YouTube {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Client for listing a channel's latest uploads.
#[derive(Debug, Clone)]
pub struct VideoClient {
    client: Client,
    api_base: String,
    api_key: Option<String>,
    channel_id: Option<String>,
    channel_handle: String,
}

impl VideoClient {
    /// Create a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            api_base: config.youtube_api_base.trim_end_matches('/').to_string(),
            api_key: config.youtube_api_key.clone().filter(|k| !k.is_empty()),
            channel_id: config.youtube_channel_id.clone().filter(|id| !id.is_empty()),
            channel_handle: normalize_channel(&config.youtube_channel_handle).to_string(),
        })
    }

    /// Whether an API key is available.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Latest uploads of the configured channel, newest first.
    ///
    /// Returns an empty list when no API key is configured. Missing
    /// statistics are not an error; those videos report zero views and no
    /// duration.
    ///
    /// # Errors
    ///
    /// Returns [`VideoError`] if the upload search fails.
    pub async fn list_recent_videos(&self) -> Result<Vec<ChannelVideo>, VideoError> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("YouTube API key not configured, skipping video listing");
            return Ok(Vec::new());
        };

        let channel_id = self.resolve_channel_id(api_key).await;
        let max_results = YOUTUBE_MAX_RESULTS.to_string();

        let search: SearchResponse = self
            .get_json(
                "search",
                &[
                    ("key", api_key),
                    ("channelId", channel_id.as_str()),
                    ("part", "snippet,id"),
                    ("order", "date"),
                    ("maxResults", max_results.as_str()),
                    ("type", "video"),
                ],
            )
            .await?;

        if search.items.is_empty() {
            warn!(channel_id = %channel_id, "YouTube search returned no videos");
            return Ok(Vec::new());
        }

        let video_ids: Vec<&str> = search
            .items
            .iter()
            .filter_map(|item| item.id.video_id.as_deref())
            .collect();

        let details = if video_ids.is_empty() {
            Default::default()
        } else {
            let ids = video_ids.join(",");
            match self
                .get_json::<VideosResponse>(
                    "videos",
                    &[
                        ("key", api_key),
                        ("id", ids.as_str()),
                        ("part", "statistics,contentDetails"),
                    ],
                )
                .await
            {
                Ok(response) => response.into_details(),
                Err(e) => {
                    warn!("Failed to fetch YouTube video details: {e}");
                    Default::default()
                }
            }
        };

        let now = Utc::now();
        let videos: Vec<ChannelVideo> = search
            .items
            .into_iter()
            .filter_map(|item| item.into_video(&details, now))
            .collect();

        info!(channel_id = %channel_id, count = videos.len(), "Listed YouTube videos");
        Ok(videos)
    }

    /// Configured channel id, else the first channel found for the handle
    /// (with `@`, then without), else the built-in default.
    async fn resolve_channel_id(&self, api_key: &str) -> String {
        if let Some(id) = &self.channel_id {
            return id.clone();
        }

        let queries = [format!("@{}", self.channel_handle), self.channel_handle.clone()];
        for query in &queries {
            match self.search_channel(api_key, query).await {
                Ok(Some(id)) => {
                    debug!(query = %query, channel_id = %id, "Resolved YouTube channel");
                    return id;
                }
                Ok(None) => debug!(query = %query, "No YouTube channel matched"),
                Err(e) => warn!(query = %query, "YouTube channel search failed: {e}"),
            }
        }

        DEFAULT_YOUTUBE_CHANNEL_ID.to_string()
    }

    async fn search_channel(
        &self,
        api_key: &str,
        query: &str,
    ) -> Result<Option<String>, VideoError> {
        let response: SearchResponse = self
            .get_json(
                "search",
                &[
                    ("key", api_key),
                    ("q", query),
                    ("type", "channel"),
                    ("part", "snippet"),
                    ("maxResults", "1"),
                ],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .find_map(|item| item.id.channel_id.filter(|id| !id.is_empty())))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T, VideoError> {
        let response = self
            .client
            .get(format!("{}/{endpoint}", self.api_base))
            .query(query)
            .send()
            .await
            .map_err(|source| VideoError::Request {
                endpoint,
                source: source.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(VideoError::Status { endpoint, status });
        }

        response.json().await.map_err(|source| VideoError::Decode {
            endpoint,
            source: source.without_url(),
        })
    }
}
