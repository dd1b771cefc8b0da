//! Markdown and code block HTML.

use std::fmt::Write;

use pulldown_cmark::{Options, Parser, html};
use tutor_preview::{escape_html, sanitize_html};

/// Render markdown to HTML.
///
/// GFM adds tables, strikethrough and task lists. Raw HTML in the markdown is
/// passed through the preview sanitizer, since lesson pages are not sandboxed.
pub fn render_markdown(markdown: &str, gfm: bool) -> String {
    if markdown.trim().is_empty() {
        return String::new();
    }

    let options = if gfm {
        Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM
    } else {
        Options::empty()
    };

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(markdown, options));
    sanitize_html(&out)
}

/// Render a code block as `<pre><code>` with an optional language class.
pub fn code_block_html(lang: &str, code: &str) -> String {
    let mut out = String::with_capacity(code.len() + 48);
    if lang.is_empty() {
        write!(out, "<pre><code>{}</code></pre>", escape_html(code)).unwrap();
    } else {
        write!(
            out,
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(code)
        )
        .unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_paragraph() {
        assert_eq!(render_markdown("Hello **world**", true), "<p>Hello <strong>world</strong></p>\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_markdown("  \n", true), "");
    }

    #[test]
    fn test_render_table_only_with_gfm() {
        let md = "| a | b |\n|---|---|\n| 1 | 2 |";
        assert!(render_markdown(md, true).contains("<table>"));
        assert!(!render_markdown(md, false).contains("<table>"));
    }

    #[test]
    fn test_raw_script_is_stripped() {
        let html = render_markdown("Text\n\n<script>alert(1)</script>\n\n<b onclick=\"x()\">b</b>", true);
        assert!(!html.contains("<script"));
        assert!(!html.contains("onclick"));
        assert!(html.contains("<b>b</b>"));
    }

    #[test]
    fn test_raw_html_handlers_are_stripped() {
        let glued = render_markdown("Intro\n\n<img src=\"x\"onerror=alert(1)>\n", true);
        assert!(!glued.contains("\"onerror"));

        let quoted = render_markdown("Intro\n\n<img alt=\">\" onerror=\"alert(1)\">\n", true);
        assert!(!quoted.contains("onerror"));
        assert!(quoted.contains(r#"<img alt=">">"#));

        let split = render_markdown("<scr</script>ipt>alert(1)</scr</script>ipt>\n", true);
        assert!(!split.to_ascii_lowercase().contains("<script"));
    }

    #[test]
    fn test_script_in_code_is_escaped_not_stripped() {
        let html = render_markdown("```html\n<script>x()</script>\n```", true);
        assert!(html.contains("&lt;script&gt;x()&lt;/script&gt;"));
    }

    #[test]
    fn test_code_block_html() {
        assert_eq!(
            code_block_html("js", "a < b"),
            r#"<pre><code class="language-js">a &lt; b</code></pre>"#
        );
        assert_eq!(code_block_html("", "x"), "<pre><code>x</code></pre>");
    }
}
