//! Plain-text rendering of post markup.
//!
//! Entities are decoded once, by the HTML parser. Nothing here touches `&`,
//! so already-decoded text like `&lt;` in a post stays literal.

use scraper::ElementRef;

use super::fragment::is_post_container;

/// Elements rendered as line boundaries.
const BLOCK_ELEMENTS: &[&str] = &["div", "p", "li", "blockquote", "pre", "tr", "h1", "h2", "h3"];

/// Elements whose content is never text.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Render the text content of `root`, turning `<br>` and block boundaries
/// into newlines and unwrapping inline markup.
///
/// Subtrees for which `skip` returns true are dropped, as are scripts,
/// styles and nested posts.
pub fn render_text(root: ElementRef<'_>, skip: &dyn Fn(ElementRef<'_>) -> bool) -> String {
    let mut out = String::new();
    push_text(root, skip, &mut out);
    out
}

fn push_text(element: ElementRef<'_>, skip: &dyn Fn(ElementRef<'_>) -> bool, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            continue;
        }
        let Some(child_element) = ElementRef::wrap(child) else {
            continue;
        };
        let value = child_element.value();
        let name = value.name();

        if name == "br" {
            out.push('\n');
            continue;
        }
        if SKIPPED_ELEMENTS.contains(&name) || is_post_container(value) || skip(child_element) {
            continue;
        }

        let block = BLOCK_ELEMENTS.contains(&name);
        if block {
            out.push('\n');
        }
        push_text(child_element, skip, out);
        if block {
            out.push('\n');
        }
    }
}

/// Normalize rendered text.
///
/// Non-breaking spaces become spaces, whitespace runs inside a line collapse
/// to one space, blank-line runs collapse to a single blank line, and the
/// result is trimmed. Applying it twice is the same as applying it once.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut pending_blank = false;

    for line in raw.split('\n') {
        let collapsed = line
            .split(|c: char| c.is_whitespace() || c == '\u{a0}')
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if collapsed.is_empty() {
            pending_blank = !lines.is_empty();
            continue;
        }
        if pending_blank {
            lines.push(String::new());
            pending_blank = false;
        }
        lines.push(collapsed);
    }

    lines.join("\n")
}

/// Truncate to at most `max_chars` characters, on a character boundary.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].trim_end().to_string(),
        None => text.to_string(),
    }
}
