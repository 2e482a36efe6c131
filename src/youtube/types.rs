use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::UNTITLED_VIDEO;

static ISO_DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").unwrap());

/// One upload as returned by the video route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelVideo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub published_at: DateTime<Utc>,
    pub channel_title: String,
    pub view_count: u64,
    /// `H:MM:SS` or `M:SS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

// ========== API payloads ==========

#[derive(Debug, Default, Deserialize)]
pub(super) struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchItem {
    #[serde(default)]
    pub id: SearchId,
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SearchId {
    pub video_id: Option<String>,
    pub channel_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Snippet {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    pub published_at: Option<String>,
    pub channel_title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct Thumbnails {
    pub maxres: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct VideosResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct VideoItem {
    pub id: String,
    pub statistics: Option<Statistics>,
    pub content_details: Option<ContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Statistics {
    pub view_count: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ContentDetails {
    pub duration: Option<String>,
}

/// View count and duration looked up from the `videos` endpoint.
#[derive(Debug, Default, Clone)]
pub(super) struct VideoDetails {
    pub view_count: u64,
    pub duration: Option<String>,
}

impl VideosResponse {
    pub fn into_details(self) -> HashMap<String, VideoDetails> {
        self.items
            .into_iter()
            .map(|item| {
                let view_count = item
                    .statistics
                    .and_then(|s| s.view_count)
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0);
                let duration = item
                    .content_details
                    .and_then(|c| c.duration)
                    .as_deref()
                    .and_then(format_duration);
                (
                    item.id,
                    VideoDetails {
                        view_count,
                        duration,
                    },
                )
            })
            .collect()
    }
}

impl SearchItem {
    /// Build a [`ChannelVideo`], or `None` for results that are not videos.
    pub fn into_video(
        self,
        details: &HashMap<String, VideoDetails>,
        now: DateTime<Utc>,
    ) -> Option<ChannelVideo> {
        let id = self.id.video_id.filter(|id| !id.is_empty())?;
        let snippet = self.snippet.unwrap_or_default();
        let VideoDetails {
            view_count,
            duration,
        } = details.get(&id).cloned().unwrap_or_default();

        let Thumbnails {
            maxres,
            high,
            medium,
        } = snippet.thumbnails;
        let thumbnail = maxres
            .or(high)
            .or(medium)
            .map(|t| t.url)
            .unwrap_or_else(|| format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg"));

        let published_at = snippet
            .published_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map_or(now, |dt| dt.with_timezone(&Utc));

        Some(ChannelVideo {
            title: snippet
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNTITLED_VIDEO.to_string()),
            description: snippet.description.unwrap_or_default(),
            thumbnail,
            published_at,
            channel_title: snippet.channel_title.unwrap_or_default(),
            view_count,
            duration,
            id,
        })
    }
}

/// Render an ISO 8601 `PT#H#M#S` duration as `H:MM:SS`, or `M:SS` when there
/// is no hour part.
///
/// Returns `None` for anything else (including `P0D`, which live streams
/// report).
#[must_use]
pub fn format_duration(iso: &str) -> Option<String> {
    let captures = ISO_DURATION.captures(iso)?;
    let part = |i: usize| -> Option<u64> { captures.get(i).and_then(|m| m.as_str().parse().ok()) };
    let (hours, minutes, seconds) = (part(1), part(2), part(3));

    if hours.is_none() && minutes.is_none() && seconds.is_none() {
        return None;
    }

    let minutes = minutes.unwrap_or(0);
    let seconds = seconds.unwrap_or(0);
    Some(match hours {
        Some(hours) => format!("{hours}:{minutes:02}:{seconds:02}"),
        None => format!("{minutes}:{seconds:02}"),
    })
}
