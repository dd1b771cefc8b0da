//! Sandboxed iframe markup for preview documents.

use crate::escape::escape_html;

/// Sandbox tokens for preview frames: same-origin styling, no scripts.
pub const DEFAULT_SANDBOX: &str = "allow-same-origin";

/// Whether a sandbox token list would let the preview run scripts.
pub fn sandbox_allows_scripts(sandbox: &str) -> bool {
    sandbox
        .split_ascii_whitespace()
        .any(|token| token.eq_ignore_ascii_case("allow-scripts"))
}

/// Wrap a preview document in an `<iframe srcdoc>` with the given sandbox.
///
/// The document is attribute-escaped, so it cannot break out of `srcdoc`.
/// A sandbox containing `allow-scripts` is replaced with [`DEFAULT_SANDBOX`].
pub fn preview_frame(document: &str, sandbox: &str) -> String {
    let sandbox = if sandbox_allows_scripts(sandbox) {
        tracing::warn!(sandbox, "Refusing script-enabled preview sandbox");
        DEFAULT_SANDBOX
    } else {
        sandbox
    };
    format!(
        r#"<iframe class="preview-frame" sandbox="{}" referrerpolicy="no-referrer" title="Live preview" srcdoc="{}"></iframe>"#,
        escape_html(sandbox.trim()),
        escape_html(document)
    )
}
