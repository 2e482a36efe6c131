//! Shared constants used across the application.

/// User agent string sent with every outbound request.
///
/// The Telegram preview page serves different (or no) markup to default
/// client signatures, so requests present themselves as a desktop browser.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// `Accept` header for HTML page fetches.
pub const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// `Accept-Language` header for HTML page fetches.
pub const BROWSER_ACCEPT_LANGUAGE: &str = "ru-RU,ru;q=0.9,en-US;q=0.8,en;q=0.7";

pub const DEFAULT_TELEGRAM_CHANNEL: &str = "Agrosanoat_uz";
pub const DEFAULT_TELEGRAM_BASE_URL: &str = "https://t.me";

/// Maximum number of posts returned from one extraction.
pub const DEFAULT_POST_LIMIT: usize = 10;

/// Text used when nothing readable could be recovered from a post.
pub const NO_TEXT_PLACEHOLDER: &str = "Без текста";

pub const DEFAULT_YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_YOUTUBE_HANDLE: &str = "Agrosanoat_uz";
pub const DEFAULT_YOUTUBE_CHANNEL_ID: &str = "UC9fTKHUcaZOC9NO9xlVKldg";

/// Number of uploads requested from the search endpoint.
pub const YOUTUBE_MAX_RESULTS: usize = 10;

/// Title used for videos whose snippet has none.
pub const UNTITLED_VIDEO: &str = "Без названия";
