//! Per-post field extraction.
//!
//! Each field with fallbacks is an ordered list of strategies, pure functions
//! from a [`Fragment`] to an optional value. The first strategy that yields a
//! value wins.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use scraper::{ElementRef, Selector};
use tracing::debug;

use super::fragment::{static_selector, Fragment};
use super::models::{ChannelPost, MediaType, PostRef};
use super::text::{clean_text, render_text, truncate_chars};
use crate::constants::NO_TEXT_PLACEHOLDER;

/// Cap on text recovered by stripping the whole fragment.
const FALLBACK_TEXT_CHARS: usize = 500;

/// Content images smaller than this on either side are treated as avatars.
const MIN_CONTENT_IMAGE_SIDE: u32 = 200;

type Strategy<T> = fn(&Fragment<'_>) -> Option<T>;

static MESSAGE_TEXT: LazyLock<Selector> =
    LazyLock::new(|| static_selector(r#"[class*="tgme_widget_message_text"]"#));
static TEXT_CANDIDATES: LazyLock<Selector> = LazyLock::new(|| static_selector("div, p"));
static TIME_WITH_DATETIME: LazyLock<Selector> =
    LazyLock::new(|| static_selector("time[datetime]"));
static PHOTO_WRAP_IMAGE: LazyLock<Selector> = LazyLock::new(|| {
    static_selector(r#"[class*="tgme_widget_message_photo_wrap"] img[src]"#)
});
static PHOTO_CLASS_IMAGE: LazyLock<Selector> =
    LazyLock::new(|| static_selector(r#"img[class*="tgme_widget_message_photo"][src]"#));
static ANY_IMAGE: LazyLock<Selector> = LazyLock::new(|| static_selector("img[src]"));
static PHOTO_CLASS_STYLED: LazyLock<Selector> =
    LazyLock::new(|| static_selector(r#"[class*="tgme_widget_message_photo"][style]"#));
static VIDEO_WITH_SRC: LazyLock<Selector> = LazyLock::new(|| static_selector("video[src]"));
static VIDEO_CONTAINER_VIDEO: LazyLock<Selector> = LazyLock::new(|| {
    static_selector(r#"[class*="tgme_widget_message_video"] video[src]"#)
});
static DATA_VIDEO: LazyLock<Selector> = LazyLock::new(|| static_selector("[data-video]"));
static MEDIA_MARKER: LazyLock<Selector> = LazyLock::new(|| {
    static_selector(
        r#"[class*="tgme_widget_message_photo"], [class*="tgme_widget_message_video"]"#,
    )
});
static DOCUMENT_MARKER: LazyLock<Selector> =
    LazyLock::new(|| static_selector(r#"[class*="tgme_widget_message_document"]"#));
static VIEWS: LazyLock<Selector> =
    LazyLock::new(|| static_selector(r#"[class*="tgme_widget_message_views"]"#));
static OWNER_NAME: LazyLock<Selector> =
    LazyLock::new(|| static_selector(r#"a[class*="tgme_widget_message_owner_name"]"#));

static BACKGROUND_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"background-image\s*:\s*url\(\s*['"]?([^'")]+)['"]?\s*\)"#).unwrap()
});
static URL_DIMENSIONS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/(\d+)x(\d+)/").unwrap());
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+(?:[.,]\d+)?").unwrap());

const TEXT_STRATEGIES: &[Strategy<String>] = &[message_text, generic_text, stripped_fragment_text];

const PHOTO_STRATEGIES: &[Strategy<MediaMatch>] = &[
    photo_wrap_image,
    photo_class_image,
    content_delivery_image,
    photo_background_image,
];

const VIDEO_STRATEGIES: &[Strategy<MediaMatch>] =
    &[inline_video, video_container_video, data_video];

/// A resolved media reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaMatch {
    pub kind: MediaType,
    pub url: String,
    pub thumbnail: Option<String>,
}

impl MediaMatch {
    fn photo(url: &str) -> Self {
        Self {
            kind: MediaType::Photo,
            url: url.to_string(),
            thumbnail: Some(url.to_string()),
        }
    }

    fn video(url: &str, thumbnail: Option<String>) -> Self {
        Self {
            kind: MediaType::Video,
            url: url.to_string(),
            thumbnail,
        }
    }
}

fn first_match<T>(fragment: &Fragment<'_>, strategies: &[Strategy<T>]) -> Option<T> {
    strategies.iter().find_map(|strategy| strategy(fragment))
}

/// Build a [`ChannelPost`] from one fragment.
///
/// Returns `None` only when the post marker cannot be parsed; every other
/// field falls back to a default.
#[must_use]
pub fn extract_post(
    fragment: &Fragment<'_>,
    link_base: &str,
    fetched_at: DateTime<Utc>,
) -> Option<ChannelPost> {
    let Some(post_ref) = PostRef::from_marker(fragment.marker()) else {
        debug!(marker = fragment.marker(), "Skipping post with unparseable marker");
        return None;
    };

    let text = extract_text(fragment).unwrap_or_else(|| {
        debug!(post = %post_ref.post_id(), "No text recovered from post");
        NO_TEXT_PLACEHOLDER.to_string()
    });
    let media = extract_media(fragment);
    let (media_type, media_url, thumbnail) = match media {
        Some(found) => (found.kind, Some(found.url), found.thumbnail),
        None if fragment.contains(&DOCUMENT_MARKER) => (MediaType::Document, None, None),
        None => (MediaType::None, None, None),
    };
    let has_media =
        thumbnail.is_some() || media_url.is_some() || fragment.contains(&MEDIA_MARKER);

    Some(ChannelPost {
        id: post_ref.post_id(),
        message_id: post_ref.message_id,
        url: post_ref.url_with_base(link_base),
        channel: post_ref.channel,
        text,
        published_at: extract_published_at(fragment).unwrap_or(fetched_at),
        thumbnail,
        media_url,
        media_type,
        has_media,
        views: extract_views(fragment),
        author: extract_author(fragment),
    })
}

// ========== Text ==========

#[must_use]
pub fn extract_text(fragment: &Fragment<'_>) -> Option<String> {
    first_match(fragment, TEXT_STRATEGIES)
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn message_text(fragment: &Fragment<'_>) -> Option<String> {
    fragment
        .select(&MESSAGE_TEXT)
        .find_map(|element| non_empty(clean_text(&render_text(element, &|_| false))))
}

/// First div or paragraph holding its own text, outside the header and footer.
fn generic_text(fragment: &Fragment<'_>) -> Option<String> {
    fragment
        .select(&TEXT_CANDIDATES)
        .filter(|element| has_direct_text(*element) && !is_post_chrome(fragment, *element))
        .find_map(|element| non_empty(clean_text(&render_text(element, &has_chrome_class))))
}

fn stripped_fragment_text(fragment: &Fragment<'_>) -> Option<String> {
    let raw = render_text(fragment.root(), &|element| {
        let value = element.value();
        value.name() == "time"
            || (value.name() == "a"
                && value
                    .classes()
                    .any(|c| c.contains("tgme_widget_message_date")))
    });
    non_empty(truncate_chars(&clean_text(&raw), FALLBACK_TEXT_CHARS))
}

fn has_direct_text(element: ElementRef<'_>) -> bool {
    element
        .children()
        .filter_map(|child| child.value().as_text())
        .any(|text| !text.trim().is_empty())
}

/// Owner header, date and view counters surround every post and are never
/// its body.
fn has_chrome_class(element: ElementRef<'_>) -> bool {
    const CHROME: &[&str] = &[
        "tgme_widget_message_footer",
        "tgme_widget_message_info",
        "tgme_widget_message_author",
        "tgme_widget_message_user",
        "tgme_widget_message_views",
        "tgme_widget_message_meta",
        "tgme_widget_message_date",
    ];
    element
        .value()
        .classes()
        .any(|class| CHROME.iter().any(|chrome| class.starts_with(chrome)))
}

fn is_post_chrome<'a>(fragment: &Fragment<'a>, element: ElementRef<'a>) -> bool {
    has_chrome_class(element) || fragment.ancestors_within(element).any(has_chrome_class)
}

// ========== Timestamp ==========

#[must_use]
pub fn extract_published_at(fragment: &Fragment<'_>) -> Option<DateTime<Utc>> {
    fragment.select(&TIME_WITH_DATETIME).find_map(|element| {
        let raw = element.value().attr("datetime")?;
        DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|parsed| parsed.with_timezone(&Utc))
    })
}

// ========== Media ==========

/// Resolve the primary media of a post, photos before videos.
#[must_use]
pub fn extract_media(fragment: &Fragment<'_>) -> Option<MediaMatch> {
    first_match(fragment, PHOTO_STRATEGIES).or_else(|| first_match(fragment, VIDEO_STRATEGIES))
}

fn url_signals_avatar(url: &str) -> bool {
    let url = url.to_lowercase();
    ["avatar", "logo", "profile"]
        .iter()
        .any(|marker| url.contains(marker))
}

fn class_signals_avatar(element: ElementRef<'_>) -> bool {
    element.value().classes().any(|class| {
        let class = class.to_lowercase();
        ["avatar", "logo", "profile", "user_photo", "message_author"]
            .iter()
            .any(|marker| class.contains(marker))
    })
}

/// Reject images that are avatars by URL, by their own classes, or by
/// sitting inside an avatar/author container.
fn is_avatar_image<'a>(fragment: &Fragment<'a>, element: ElementRef<'a>, url: &str) -> bool {
    url_signals_avatar(url)
        || class_signals_avatar(element)
        || fragment.ancestors_within(element).any(class_signals_avatar)
}

fn image_src<'a>(fragment: &Fragment<'a>, element: ElementRef<'a>) -> Option<&'a str> {
    let src = element.value().attr("src")?.trim();
    if src.is_empty() || is_avatar_image(fragment, element, src) {
        None
    } else {
        Some(src)
    }
}

fn photo_wrap_image(fragment: &Fragment<'_>) -> Option<MediaMatch> {
    fragment
        .select(&PHOTO_WRAP_IMAGE)
        .find_map(|element| image_src(fragment, element))
        .map(MediaMatch::photo)
}

fn photo_class_image(fragment: &Fragment<'_>) -> Option<MediaMatch> {
    fragment
        .select(&PHOTO_CLASS_IMAGE)
        .find_map(|element| image_src(fragment, element))
        .map(MediaMatch::photo)
}

/// Any image served from a CDN origin that is not avatar-sized.
fn content_delivery_image(fragment: &Fragment<'_>) -> Option<MediaMatch> {
    fragment
        .select(&ANY_IMAGE)
        .filter_map(|element| image_src(fragment, element))
        .find(|src| is_content_image_url(src))
        .map(MediaMatch::photo)
}

/// Best-effort check that a URL points at post content rather than a
/// channel icon: HTTPS, CDN host, and no sub-200px dimensions in the path.
#[must_use]
pub fn is_content_image_url(url: &str) -> bool {
    if !url.starts_with("https://") {
        return false;
    }
    let lower = url.to_lowercase();
    if ["icon", "channel"].iter().any(|marker| lower.contains(marker)) {
        return false;
    }
    if !(lower.contains("cdn") || lower.contains("telesco.pe")) {
        return false;
    }
    match url_dimensions(url) {
        Some((width, height)) => {
            width >= MIN_CONTENT_IMAGE_SIDE && height >= MIN_CONTENT_IMAGE_SIDE
        }
        None => true,
    }
}

fn url_dimensions(url: &str) -> Option<(u32, u32)> {
    let captures = URL_DIMENSIONS.captures(url)?;
    Some((captures[1].parse().ok()?, captures[2].parse().ok()?))
}

fn background_image_url(element: ElementRef<'_>) -> Option<&str> {
    let style = element.value().attr("style")?;
    let url = BACKGROUND_IMAGE.captures(style)?.get(1)?.as_str().trim();
    if url.is_empty() {
        None
    } else {
        Some(url)
    }
}

fn photo_background_image(fragment: &Fragment<'_>) -> Option<MediaMatch> {
    fragment
        .select(&PHOTO_CLASS_STYLED)
        .find_map(|element| {
            let url = background_image_url(element)?;
            (!is_avatar_image(fragment, element, url)).then_some(url)
        })
        .map(MediaMatch::photo)
}

fn is_video_container(element: ElementRef<'_>) -> bool {
    element
        .value()
        .classes()
        .any(|class| class.contains("tgme_widget_message_video"))
}

fn non_empty_attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element
        .value()
        .attr(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// A bare `<video src>` outside any video container, poster as thumbnail.
fn inline_video(fragment: &Fragment<'_>) -> Option<MediaMatch> {
    fragment
        .select(&VIDEO_WITH_SRC)
        .filter(|element| !fragment.ancestors_within(*element).any(is_video_container))
        .find_map(|element| {
            let src = non_empty_attr(element, "src")?;
            let poster = non_empty_attr(element, "poster").map(String::from);
            Some(MediaMatch::video(src, poster))
        })
}

/// A `<video src>` inside a video container. The thumbnail comes from the
/// poster, an image in the container, or the container's background image.
fn video_container_video(fragment: &Fragment<'_>) -> Option<MediaMatch> {
    fragment.select(&VIDEO_CONTAINER_VIDEO).find_map(|element| {
        let src = non_empty_attr(element, "src")?;
        let thumbnail = non_empty_attr(element, "poster")
            .map(String::from)
            .or_else(|| video_container_thumbnail(fragment, element));
        Some(MediaMatch::video(src, thumbnail))
    })
}

fn video_container_thumbnail<'a>(fragment: &Fragment<'a>, video: ElementRef<'a>) -> Option<String> {
    let container = fragment
        .ancestors_within(video)
        .filter(|ancestor| is_video_container(*ancestor))
        .last()?;

    let from_img = container
        .select(&ANY_IMAGE)
        .find_map(|img| image_src(fragment, img));
    let from_style = || {
        container
            .descendants()
            .filter_map(ElementRef::wrap)
            .find_map(background_image_url)
    };

    from_img.or_else(from_style).map(String::from)
}

fn data_video(fragment: &Fragment<'_>) -> Option<MediaMatch> {
    fragment
        .select(&DATA_VIDEO)
        .find_map(|element| non_empty_attr(element, "data-video"))
        .map(|url| MediaMatch::video(url, None))
}

// ========== Views & author ==========

#[must_use]
pub fn extract_views(fragment: &Fragment<'_>) -> Option<u64> {
    let element = fragment.select(&VIEWS).next()?;
    parse_view_count(&clean_text(&render_text(element, &|_| false)))
}

/// Parse a view counter such as `842`, `1.2K` or `5,5M`.
///
/// The leading number is scaled by 1,000 for a `K` (or Cyrillic `к`) suffix
/// and by 1,000,000 for `M` (or `м`), then rounded.
#[must_use]
pub fn parse_view_count(text: &str) -> Option<u64> {
    let number = LEADING_NUMBER.find(text)?.as_str().replace(',', ".");
    let value: f64 = number.parse().ok()?;

    let multiplier = if text.contains(['K', 'k', 'к', 'К']) {
        1_000.0
    } else if text.contains(['M', 'm', 'м', 'М']) {
        1_000_000.0
    } else {
        1.0
    };

    let scaled = (value * multiplier).round();
    if scaled.is_finite() && scaled >= 0.0 {
        Some(scaled as u64)
    } else {
        None
    }
}

#[must_use]
pub fn extract_author(fragment: &Fragment<'_>) -> Option<String> {
    fragment
        .select(&OWNER_NAME)
        .find_map(|element| non_empty(clean_text(&render_text(element, &|_| false))))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use scraper::Html;

    use super::*;
    use crate::telegram::fragment::split_fragments;

    fn fetched_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn extract_one(inner: &str) -> ChannelPost {
        let html = format!(
            r#"<html><body><div class="tgme_widget_message js-widget_message" data-post="chan/10">{inner}</div></body></html>"#
        );
        let document = Html::parse_document(&html);
        let fragments = split_fragments(&document);
        assert_eq!(fragments.len(), 1);
        extract_post(&fragments[0], "https://t.me", fetched_at()).unwrap()
    }

    #[test]
    fn test_full_post() {
        let post = extract_one(
            r#"
            <div class="tgme_widget_message_user"><a href="https://t.me/chan"><i class="tgme_widget_message_user_photo"><img src="https://cdn4.telesco.pe/file/channel_avatar.jpg"></i></a></div>
            <div class="tgme_widget_message_bubble">
              <div class="tgme_widget_message_author"><a class="tgme_widget_message_owner_name" href="https://t.me/chan"><span dir="auto">Agro News</span></a></div>
              <a class="tgme_widget_message_photo_wrap" style="width:800px;background-image:url('https://cdn4.telesco.pe/file/photo_one.jpg')"></a>
              <div class="tgme_widget_message_text js-message_text" dir="auto">Harvest <b>started</b><br/>in Fergana &amp; Andijan</div>
              <div class="tgme_widget_message_footer">
                <div class="tgme_widget_message_info">
                  <span class="tgme_widget_message_views">1.2K</span>
                  <span class="tgme_widget_message_meta"><a class="tgme_widget_message_date" href="https://t.me/chan/10"><time datetime="2024-05-30T08:15:00+00:00" class="time">08:15</time></a></span>
                </div>
              </div>
            </div>"#,
        );

        assert_eq!(post.id, "chan_10");
        assert_eq!(post.message_id, 10);
        assert_eq!(post.channel, "chan");
        assert_eq!(post.text, "Harvest started\nin Fergana & Andijan");
        assert_eq!(
            post.published_at,
            Utc.with_ymd_and_hms(2024, 5, 30, 8, 15, 0).unwrap()
        );
        assert_eq!(post.media_type, MediaType::Photo);
        assert_eq!(
            post.media_url.as_deref(),
            Some("https://cdn4.telesco.pe/file/photo_one.jpg")
        );
        assert_eq!(post.thumbnail, post.media_url);
        assert!(post.has_media);
        assert_eq!(post.views, Some(1200));
        assert_eq!(post.author.as_deref(), Some("Agro News"));
        assert_eq!(post.url, "https://t.me/chan/10");
    }

    #[test]
    fn test_text_only_post() {
        let post = extract_one(r#"<div class="tgme_widget_message_text">Just words</div>"#);
        assert_eq!(post.text, "Just words");
        assert_eq!(post.media_type, MediaType::None);
        assert_eq!(post.media_url, None);
        assert_eq!(post.thumbnail, None);
        assert!(!post.has_media);
        assert_eq!(post.views, None);
        assert_eq!(post.author, None);
        assert_eq!(post.published_at, fetched_at());
    }

    #[test]
    fn test_generic_text_fallback_skips_footer() {
        let post = extract_one(
            r#"<div class="tgme_widget_message_footer"><span class="tgme_widget_message_views">5</span></div>
               <div class="tgme_widget_message_document_title">Annual report.pdf</div>"#,
        );
        assert_eq!(post.text, "Annual report.pdf");
        assert_eq!(post.media_type, MediaType::Document);
        assert_eq!(post.media_url, None);
    }

    #[test]
    fn test_stripped_fallback_drops_time_and_date() {
        let post = extract_one(
            r##"<span>Loose <b>words</b> here</span>
               <a class="tgme_widget_message_date" href="#">yesterday</a>
               <time datetime="2024-05-30T08:15:00+00:00">08:15</time>"##,
        );
        assert_eq!(post.text, "Loose words here");
    }

    #[test]
    fn test_stripped_fallback_truncates() {
        let long = "слово ".repeat(200);
        let post = extract_one(&format!("<span>{long}</span>"));
        assert_eq!(post.text.chars().count(), 500);
    }

    #[test]
    fn test_no_text_placeholder() {
        let post = extract_one(r#"<time datetime="2024-05-30T08:15:00+00:00">08:15</time>"#);
        assert_eq!(post.text, NO_TEXT_PLACEHOLDER);
    }

    #[test]
    fn test_unparseable_datetime_defaults_to_fetch_time() {
        let post = extract_one(
            r#"<div class="tgme_widget_message_text">x</div><time datetime="yesterday">?</time>"#,
        );
        assert_eq!(post.published_at, fetched_at());
    }

    #[test]
    fn test_photo_wrap_img_preferred() {
        let post = extract_one(
            r#"<div class="tgme_widget_message_photo_wrap"><img src="https://cdn1.telesco.pe/file/wrapped.jpg"></div>
               <img class="tgme_widget_message_photo" src="https://cdn1.telesco.pe/file/classed.jpg">"#,
        );
        assert_eq!(
            post.media_url.as_deref(),
            Some("https://cdn1.telesco.pe/file/wrapped.jpg")
        );
    }

    #[test]
    fn test_avatar_images_rejected() {
        let post = extract_one(
            r#"<i class="tgme_widget_message_user_photo"><img src="https://cdn4.telesco.pe/file/abc.jpg"></i>
               <img class="avatar" src="https://cdn4.telesco.pe/file/def.jpg">
               <img src="https://cdn4.telesco.pe/file/logo.png">
               <img src="https://cdn4.telesco.pe/file/160x160/small.jpg">
               <div class="tgme_widget_message_text">text</div>"#,
        );
        assert_eq!(post.thumbnail, None);
        assert_eq!(post.media_url, None);
        assert_eq!(post.media_type, MediaType::None);
        assert!(!post.has_media);
    }

    #[test]
    fn test_large_cdn_image_accepted() {
        let post = extract_one(r#"<img src="https://cdn5.telesco.pe/file/800x600/big.jpg">"#);
        assert_eq!(post.media_type, MediaType::Photo);
        assert_eq!(
            post.media_url.as_deref(),
            Some("https://cdn5.telesco.pe/file/800x600/big.jpg")
        );
    }

    #[test]
    fn test_non_cdn_image_ignored() {
        let post = extract_one(r#"<img src="https://example.com/picture.jpg">"#);
        assert_eq!(post.media_type, MediaType::None);
    }

    #[test]
    fn test_inline_video_with_poster() {
        let post = extract_one(
            r#"<video src="https://cdn.example/clip.mp4" poster="https://cdn.example/poster.jpg"></video>"#,
        );
        assert_eq!(post.media_type, MediaType::Video);
        assert_eq!(post.media_url.as_deref(), Some("https://cdn.example/clip.mp4"));
        assert_eq!(post.thumbnail.as_deref(), Some("https://cdn.example/poster.jpg"));
        assert!(post.has_media);
    }

    #[test]
    fn test_video_container_thumbnail_from_background() {
        let post = extract_one(
            r#"<a class="tgme_widget_message_video_player" href="https://t.me/chan/10">
                 <i class="tgme_widget_message_video_thumb" style="background-image:url('https://cdn4.telesco.pe/file/thumb.jpg')"></i>
                 <div class="tgme_widget_message_video_wrap">
                   <video class="tgme_widget_message_video js-message_video" src="https://cdn4.telesco.pe/file/video.mp4"></video>
                 </div>
               </a>"#,
        );
        assert_eq!(post.media_type, MediaType::Video);
        assert_eq!(
            post.media_url.as_deref(),
            Some("https://cdn4.telesco.pe/file/video.mp4")
        );
        assert_eq!(
            post.thumbnail.as_deref(),
            Some("https://cdn4.telesco.pe/file/thumb.jpg")
        );
    }

    #[test]
    fn test_data_video_reference() {
        let post = extract_one(r#"<div data-video="https://cdn.example/v.mp4"></div>"#);
        assert_eq!(post.media_type, MediaType::Video);
        assert_eq!(post.media_url.as_deref(), Some("https://cdn.example/v.mp4"));
        assert_eq!(post.thumbnail, None);
        assert!(post.has_media);
    }

    #[test]
    fn test_structural_marker_sets_has_media_without_url() {
        let post = extract_one(
            r#"<div class="tgme_widget_message_video_player blured"></div><div class="tgme_widget_message_text">Video too big</div>"#,
        );
        assert!(post.has_media);
        assert_eq!(post.media_url, None);
        assert_eq!(post.media_type, MediaType::None);
    }

    #[test]
    fn test_parse_view_count() {
        assert_eq!(parse_view_count("1.2K"), Some(1200));
        assert_eq!(parse_view_count("5.5M"), Some(5_500_000));
        assert_eq!(parse_view_count("842"), Some(842));
        assert_eq!(parse_view_count("3,4к"), Some(3400));
        assert_eq!(parse_view_count("2м"), Some(2_000_000));
        assert_eq!(parse_view_count("12.6"), Some(13));
        assert_eq!(parse_view_count(""), None);
        assert_eq!(parse_view_count("views"), None);
    }

    #[test]
    fn test_is_content_image_url() {
        assert!(is_content_image_url("https://cdn4.telesco.pe/file/abc.jpg"));
        assert!(is_content_image_url("https://cdn.example.com/640x480/abc.jpg"));
        assert!(!is_content_image_url("https://cdn.example.com/100x640/abc.jpg"));
        assert!(!is_content_image_url("http://cdn4.telesco.pe/file/abc.jpg"));
        assert!(!is_content_image_url("https://telegram.org/img/t_logo.png"));
        assert!(!is_content_image_url("https://cdn4.telesco.pe/channel/abc.jpg"));
    }
}
