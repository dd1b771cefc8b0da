//! Preview document assembly.
//!
//! Three paths, tried in order:
//!
//! 1. Code carrying both `/*HTML*/` and `/*CSS*/` markers is split into its
//!    markup and stylesheet halves.
//! 2. Markup (by language, or because the code contains an HTML tag) is
//!    sanitized and wrapped in a minimal document unless it already is one.
//! 3. CSS is injected into a demo document with sample elements to style.
//!
//! Anything else has no preview.

use std::sync::LazyLock;

use regex::Regex;

use crate::sanitize::sanitize_html;

const HTML_MARKER: &str = "/*HTML*/";
const CSS_MARKER: &str = "/*CSS*/";

/// Styles shared by generated documents.
const BASE_STYLES: &str = "\
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; line-height: 1.5; margin: 16px; color: #1f2933; }
img { max-width: 100%; }";

/// Sample markup for CSS-only snippets, covering common selector targets.
const CSS_DEMO_BODY: &str = r##"<h1>Heading 1</h1>
<h2>Heading 2</h2>
<p>A paragraph with <a href="#">a link</a>, <strong>bold</strong> and <em>italic</em> text.</p>
<div class="box">.box element</div>
<div id="special">#special element</div>
<div class="container">
  <div class="box">.box inside .container</div>
  <p>Paragraph inside .container</p>
</div>
<div class="card">
  <h3 class="card-title">Card title</h3>
  <p class="card-text">Card body text.</p>
  <button class="btn">Button</button>
</div>
<ul>
  <li>List item one</li>
  <li class="active">List item two (.active)</li>
  <li>List item three</li>
</ul>
<input type="text" placeholder="Text input">"##;

/// An HTML start or end tag not glued to an identifier, so `List<String>`
/// and `Vec<u8>` do not count.
static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|[^\w$])</?[a-z][a-z0-9-]*(?:\s[^<>]*)?/?>").unwrap());

/// A complete `<html>...</html>` document.
static HTML_SHELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<html[\s>].*</html\s*>").unwrap());

/// Closing style tags that would end an injected stylesheet early.
static STYLE_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</style").unwrap());

/// Language family of a code example, as far as previews are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewLanguage {
    /// HTML and related markup.
    Markup,
    /// CSS stylesheets.
    Css,
    /// Anything without a preview of its own.
    Other,
}

impl PreviewLanguage {
    /// Classify a code fence language tag.
    pub fn from_tag(lang: &str) -> Self {
        match lang.trim().to_ascii_lowercase().as_str() {
            "markup" | "html" | "htm" | "xml" | "svg" | "xhtml" => Self::Markup,
            "css" => Self::Css,
            _ => Self::Other,
        }
    }
}

/// Build a self-contained preview document for a code example.
///
/// Returns `None` when the code has no preview; callers should not offer a
/// preview control in that case.
///
/// # Example
///
/// ```
/// use tutor_preview::build_preview_doc;
///
/// let doc = build_preview_doc("markup", "<script>alert(1)</script><p>hi</p>").unwrap();
/// assert!(!doc.contains("<script"));
/// assert!(doc.contains("<p>hi</p>"));
/// ```
pub fn build_preview_doc(lang: &str, code: &str) -> Option<String> {
    if let Some(doc) = combined_doc(code) {
        return Some(doc);
    }

    let language = PreviewLanguage::from_tag(lang);
    if language == PreviewLanguage::Markup || HTML_TAG_RE.is_match(code) {
        return Some(markup_doc(code));
    }

    (language == PreviewLanguage::Css).then(|| css_demo_doc(code))
}

/// Document from code with both `/*HTML*/` and `/*CSS*/` markers.
fn combined_doc(code: &str) -> Option<String> {
    let html_at = code.find(HTML_MARKER)?;
    let css_at = code.find(CSS_MARKER)?;

    let (html, css) = if html_at < css_at {
        (
            &code[html_at + HTML_MARKER.len()..css_at],
            &code[css_at + CSS_MARKER.len()..],
        )
    } else {
        (
            &code[html_at + HTML_MARKER.len()..],
            &code[css_at + CSS_MARKER.len()..html_at],
        )
    };

    Some(format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>{}</style></head><body>{}</body></html>",
        guard_stylesheet(css.trim()),
        sanitize_html(html.trim())
    ))
}

fn markup_doc(code: &str) -> String {
    let html = sanitize_html(code);
    if HTML_SHELL_RE.is_match(&html) {
        return html;
    }
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>{BASE_STYLES}</style></head><body>{}</body></html>",
        html.trim()
    )
}

fn css_demo_doc(css: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>{BASE_STYLES}</style><style>{}</style></head><body>{CSS_DEMO_BODY}</body></html>",
        guard_stylesheet(css.trim())
    )
}

/// Keep a stylesheet from closing its `<style>` element.
fn guard_stylesheet(css: &str) -> String {
    STYLE_CLOSE_RE.replace_all(css, r"<\/style").into_owned()
}
