//! Recent uploads from a YouTube channel via the Data API v3.

mod client;
mod types;

pub use client::{VideoClient, VideoError};
pub use types::{format_duration, ChannelVideo};
