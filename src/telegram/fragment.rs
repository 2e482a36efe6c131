//! Splitting a channel preview page into per-post fragments.
//!
//! Each post on `t.me/s/<channel>` is a `div.tgme_widget_message` carrying a
//! `data-post="<channel>/<id>"` attribute. A fragment is that element's
//! subtree. Lookups through [`Fragment::select`] skip anything owned by a
//! nested post container, so a fragment never sees a neighbour's media or
//! text even when unclosed tags make the parser nest one post inside another.

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::node::Element;
use scraper::{ElementRef, Html, Selector};

/// Class token every post container carries.
const POST_CLASS: &str = "tgme_widget_message";

/// Attribute holding `<channel>/<messageId>`.
const POST_ATTR: &str = "data-post";

static POST_CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| static_selector(".tgme_widget_message[data-post]"));

/// Parse a selector that is known to be valid at compile time.
pub(super) fn static_selector(css: &str) -> Selector {
    Selector::parse(css).expect("Invalid selector")
}

/// Whether an element opens a post.
pub(super) fn is_post_container(element: &Element) -> bool {
    element.attr(POST_ATTR).is_some() && element.classes().any(|c| c == POST_CLASS)
}

/// The markup belonging to one post.
#[derive(Debug, Clone, Copy)]
pub struct Fragment<'a> {
    marker: &'a str,
    root: ElementRef<'a>,
}

impl<'a> Fragment<'a> {
    /// Raw `data-post` value.
    #[must_use]
    pub fn marker(&self) -> &'a str {
        self.marker
    }

    /// The post container element.
    #[must_use]
    pub fn root(&self) -> ElementRef<'a> {
        self.root
    }

    /// Descendants matching `selector` that belong to this post.
    pub fn select<'s>(
        &'s self,
        selector: &'s Selector,
    ) -> impl Iterator<Item = ElementRef<'a>> + 's {
        self.root
            .select(selector)
            .filter(move |element| self.owns(*element))
    }

    /// Whether any element owned by this post matches `selector`.
    #[must_use]
    pub fn contains(&self, selector: &Selector) -> bool {
        self.select(selector).next().is_some()
    }

    /// True when the closest enclosing post container of `element` is this
    /// fragment's root. A nested post container belongs to itself.
    #[must_use]
    pub fn owns(&self, element: ElementRef<'a>) -> bool {
        if element.id() != self.root.id() && is_post_container(element.value()) {
            return false;
        }
        for ancestor in element.ancestors() {
            if ancestor.id() == self.root.id() {
                return true;
            }
            if let Some(parent) = ancestor.value().as_element() {
                if is_post_container(parent) {
                    return false;
                }
            }
        }
        false
    }

    /// Ancestors of `element` inside this fragment, nearest first, excluding
    /// the root itself.
    pub fn ancestors_within(
        &self,
        element: ElementRef<'a>,
    ) -> impl Iterator<Item = ElementRef<'a>> + '_ {
        element
            .ancestors()
            .take_while(move |node| node.id() != self.root.id())
            .filter_map(ElementRef::wrap)
    }
}

/// Split a parsed page into post fragments in document order.
///
/// Fragments whose marker was already seen are dropped; the first occurrence
/// wins.
#[must_use]
pub fn split_fragments(document: &Html) -> Vec<Fragment<'_>> {
    let mut seen = HashSet::new();
    let mut fragments = Vec::new();

    for root in document.select(&POST_CONTAINER) {
        let Some(marker) = root.value().attr(POST_ATTR) else {
            continue;
        };
        if !seen.insert(marker) {
            tracing::debug!(marker, "Skipping duplicate post marker");
            continue;
        }
        fragments.push(Fragment { marker, root });
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img_srcs(fragment: &Fragment<'_>) -> Vec<String> {
        let img = static_selector("img[src]");
        fragment
            .select(&img)
            .filter_map(|el| el.value().attr("src").map(String::from))
            .collect()
    }

    #[test]
    fn test_split_sibling_posts() {
        let html = r#"
            <div class="tgme_widget_message_wrap">
              <div class="tgme_widget_message js-widget_message" data-post="chan/1"><img src="https://cdn.example/a.jpg"></div>
            </div>
            <div class="tgme_widget_message_wrap">
              <div class="tgme_widget_message js-widget_message" data-post="chan/2"><img src="https://cdn.example/b.jpg"></div>
            </div>
        "#;
        let document = Html::parse_document(html);
        let fragments = split_fragments(&document);

        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].marker(), "chan/1");
        assert_eq!(img_srcs(&fragments[0]), vec!["https://cdn.example/a.jpg"]);
        assert_eq!(img_srcs(&fragments[1]), vec!["https://cdn.example/b.jpg"]);
    }

    #[test]
    fn test_duplicate_marker_keeps_first() {
        let html = r#"
            <div class="tgme_widget_message" data-post="chan/7"><p>first</p></div>
            <div class="tgme_widget_message" data-post="chan/7"><p>second</p></div>
        "#;
        let document = Html::parse_document(html);
        let fragments = split_fragments(&document);

        assert_eq!(fragments.len(), 1);
        let text: String = fragments[0].root().text().collect();
        assert!(text.contains("first"));
    }

    #[test]
    fn test_unclosed_post_does_not_swallow_neighbour() {
        // The first post never closes its wrapper, so the parser nests the
        // second post inside it.
        let html = r#"
            <div class="tgme_widget_message" data-post="chan/1">
              <div class="inner"><img src="https://cdn.example/one.jpg">
            <div class="tgme_widget_message" data-post="chan/2">
              <img src="https://cdn.example/two.jpg">
            </div>
        "#;
        let document = Html::parse_document(html);
        let fragments = split_fragments(&document);

        assert_eq!(fragments.len(), 2);
        assert_eq!(img_srcs(&fragments[0]), vec!["https://cdn.example/one.jpg"]);
        assert_eq!(img_srcs(&fragments[1]), vec!["https://cdn.example/two.jpg"]);
    }

    #[test]
    fn test_nested_post_container_not_owned_by_outer() {
        let html = r#"
            <div class="tgme_widget_message" data-post="chan/1">
              <div class="inner"><span>First</span>
            <div class="tgme_widget_message" data-post="chan/2"><p>Second</p></div>
        "#;
        let document = Html::parse_document(html);
        let fragments = split_fragments(&document);
        let any_div = static_selector("div, p");

        let outer: Vec<_> = fragments[0].select(&any_div).collect();
        assert!(outer.iter().all(|el| el.value().attr("data-post").is_none()));
        assert!(outer.iter().all(|el| el.value().name() != "p"));
        assert_eq!(fragments[1].select(&any_div).count(), 1);
    }

    #[test]
    fn test_wrapper_without_post_class_is_ignored() {
        let html = r#"<div class="tgme_widget_message_wrap" data-post="chan/1"></div>"#;
        let document = Html::parse_document(html);
        assert!(split_fragments(&document).is_empty());
    }

    #[test]
    fn test_page_without_posts() {
        let document = Html::parse_document("<html><body><p>nothing here</p></body></html>");
        assert!(split_fragments(&document).is_empty());
    }
}
