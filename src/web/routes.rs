use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::AppState;
use crate::telegram::ChannelPost;
use crate::youtube::ChannelVideo;

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health))
        .route("/api/channel-posts", get(api_channel_posts))
        .route("/api/telegram", get(api_channel_posts))
        .route("/api/videos", get(api_videos))
        .route("/api/youtube", get(api_videos))
}

async fn health() -> &'static str {
    "OK"
}

// ========== JSON API Routes ==========
//
// Both feeds answer 200 with an empty list on failure so that a page embedding
// them never breaks.

#[derive(Debug, Serialize)]
pub struct PostsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    posts: Vec<ChannelPost>,
}

#[derive(Debug, Serialize)]
pub struct VideosResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    videos: Vec<ChannelVideo>,
}

async fn api_channel_posts(State(state): State<AppState>) -> Json<PostsResponse> {
    let channel = &state.config.telegram_channel;
    let limit = state.config.telegram_post_limit;

    let result = state
        .post_cache
        .get_or_refresh(|| state.channel_client.fetch_posts(channel, limit))
        .await;

    match result {
        Ok(posts) => Json(PostsResponse { error: None, posts }),
        Err(e) => {
            tracing::error!(channel = %channel, "Failed to fetch channel posts: {e}");
            Json(PostsResponse {
                error: Some("Failed to fetch Telegram posts"),
                posts: Vec::new(),
            })
        }
    }
}

async fn api_videos(State(state): State<AppState>) -> Json<VideosResponse> {
    if !state.video_client.is_configured() {
        return Json(VideosResponse {
            error: Some("YouTube API key not configured"),
            videos: Vec::new(),
        });
    }

    let result = state
        .video_cache
        .get_or_refresh(|| state.video_client.list_recent_videos())
        .await;

    match result {
        Ok(videos) => Json(VideosResponse {
            error: None,
            videos,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch YouTube videos: {e}");
            Json(VideosResponse {
                error: Some("Failed to fetch YouTube videos"),
                videos: Vec::new(),
            })
        }
    }
}
