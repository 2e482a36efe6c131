//! Channel preview-page scraping.
//!
//! Fetches `t.me/s/<channel>`, splits the page into one fragment per post and
//! extracts a [`ChannelPost`] from each fragment independently.

mod client;
mod extract;
mod fragment;
mod models;
mod text;

pub use client::{parse_channel_page, ChannelClient, FetchError};
pub use extract::{is_content_image_url, parse_view_count};
pub use models::{normalize_channel, ChannelPost, MediaType, PostRef};
