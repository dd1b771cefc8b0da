//! String-level HTML sanitizer for preview markup.
//!
//! Not a full HTML parser. Preview documents are rendered in a frame without
//! `allow-scripts`; this pass removes the obvious script vectors as well.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Complete `<script>...</script>` blocks.
static SCRIPT_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap());

/// An opening `<script>` left without a closing tag swallows the rest.
static SCRIPT_UNCLOSED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*$").unwrap());

/// Stray closing script tags.
static SCRIPT_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</script\s*>").unwrap());

/// Opening or self-closing start tags. Quoted attribute values may contain `>`.
static START_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<([a-zA-Z][a-zA-Z0-9-]*)((?:"[^"]*"|'[^']*'|[^'">])*)>"#).unwrap()
});

/// One attribute inside a start tag, with an optional value.
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]*))?"#).unwrap()
});

/// Strip script blocks and inline event handlers from HTML.
///
/// Script tag removal repeats until the output stops changing, so removing
/// one piece cannot assemble a new `<script>` tag from the pieces around it.
/// Whatever follows a remaining unclosed `<script` is dropped.
///
/// # Examples
///
/// ```
/// use tutor_preview::sanitize_html;
///
/// assert_eq!(
///     sanitize_html(r#"<script>alert(1)</script><p onclick="x()">hi</p>"#),
///     "<p>hi</p>"
/// );
/// ```
pub fn sanitize_html(html: &str) -> String {
    let mut current = html.to_owned();
    loop {
        let next = strip_script_tags(&current);
        if next == current {
            break;
        }
        current = next;
    }

    let without_unclosed = SCRIPT_UNCLOSED_RE.replace(&current, "");
    let sanitized = START_TAG_RE
        .replace_all(&without_unclosed, |caps: &Captures| strip_event_handlers(caps))
        .into_owned();

    if sanitized.len() != html.len() {
        tracing::debug!(
            removed_bytes = html.len().saturating_sub(sanitized.len()),
            "Sanitized preview markup"
        );
    }
    sanitized
}

/// One round of script block and stray close tag removal.
fn strip_script_tags(html: &str) -> String {
    let without_blocks = SCRIPT_BLOCK_RE.replace_all(html, "");
    SCRIPT_CLOSE_RE.replace_all(&without_blocks, "").into_owned()
}

/// Rebuild a start tag without its `on*` attributes.
///
/// Tags without handlers are returned unchanged.
fn strip_event_handlers(caps: &Captures) -> String {
    let attrs = &caps[2];
    let is_handler = |name: &str| {
        name.len() > 2 && name.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("on"))
    };
    if !ATTR_RE.captures_iter(attrs).any(|attr| is_handler(&attr[1])) {
        return caps[0].to_owned();
    }

    let mut tag = format!("<{}", &caps[1]);
    for attr in ATTR_RE.captures_iter(attrs).filter(|attr| !is_handler(&attr[1])) {
        tag.push(' ');
        tag.push_str(&attr[0]);
    }
    if attrs.trim_end().ends_with('/') {
        tag.push_str(" /");
    }
    tag.push('>');
    tag
}
