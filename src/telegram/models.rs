use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TELEGRAM_BASE_URL;

// t.me/<channel>/<id>, with or without scheme
static POST_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"t\.me/(?:s/)?([^/?#\s]+)/(\d+)").unwrap());

/// Kind of media attached to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
    Document,
    None,
}

/// One post recovered from a channel preview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPost {
    /// `{channel}_{messageId}`
    pub id: String,
    pub message_id: u64,
    pub channel: String,
    /// Plain text with markup stripped.
    pub text: String,
    pub published_at: DateTime<Utc>,
    pub thumbnail: Option<String>,
    /// Direct link to the photo or video, when one could be resolved.
    pub media_url: Option<String>,
    pub media_type: MediaType,
    /// Set when any media marker is present, even without a resolved URL.
    pub has_media: bool,
    pub views: Option<u64>,
    pub author: Option<String>,
    pub url: String,
}

/// A `(channel, messageId)` pair identifying a post.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostRef {
    pub channel: String,
    pub message_id: u64,
}

impl PostRef {
    /// Parse a `data-post` marker of the form `<channel>/<messageId>`.
    #[must_use]
    pub fn from_marker(marker: &str) -> Option<Self> {
        let (channel, message_id) = marker.trim().rsplit_once('/')?;
        let channel = channel.rsplit('/').next().unwrap_or(channel);
        Self::build(channel, message_id)
    }

    /// Parse a post link such as `https://t.me/<channel>/<messageId>`.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        let captures = POST_URL.captures(url)?;
        Self::build(&captures[1], &captures[2])
    }

    fn build(channel: &str, message_id: &str) -> Option<Self> {
        let channel = normalize_channel(channel);
        if channel.is_empty() {
            return None;
        }
        Some(Self {
            channel: channel.to_string(),
            message_id: message_id.parse().ok()?,
        })
    }

    /// Batch-unique identifier, `{channel}_{messageId}`.
    #[must_use]
    pub fn post_id(&self) -> String {
        format!("{}_{}", self.channel, self.message_id)
    }

    /// Link to the post under `base` (e.g. `https://t.me`).
    #[must_use]
    pub fn url_with_base(&self, base: &str) -> String {
        format!(
            "{}/{}/{}",
            base.trim_end_matches('/'),
            self.channel,
            self.message_id
        )
    }

    /// Canonical `https://t.me/<channel>/<messageId>` link.
    #[must_use]
    pub fn url(&self) -> String {
        self.url_with_base(DEFAULT_TELEGRAM_BASE_URL)
    }
}

/// Strip a leading `@` from a channel identifier.
#[must_use]
pub fn normalize_channel(channel: &str) -> &str {
    let channel = channel.trim();
    channel.strip_prefix('@').unwrap_or(channel)
}
