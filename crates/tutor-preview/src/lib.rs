//! Live-preview documents for lesson code examples.
//!
//! [`build_preview_doc`] turns an HTML or CSS snippet into a self-contained
//! HTML document meant for an `<iframe srcdoc>`. The frame produced by
//! [`preview_frame`] is sandboxed without `allow-scripts`, which is the real
//! containment boundary; [`sanitize_html`] additionally strips script blocks
//! and inline event handlers before any markup is embedded.
//!
//! # Example
//!
//! ```
//! use tutor_preview::{DEFAULT_SANDBOX, build_preview_doc, preview_frame};
//!
//! let doc = build_preview_doc("css", ".box { color: red }").unwrap();
//! assert!(doc.contains(".box { color: red }"));
//!
//! let frame = preview_frame(&doc, DEFAULT_SANDBOX);
//! assert!(frame.starts_with(r#"<iframe class="preview-frame" sandbox="allow-same-origin""#));
//!
//! assert!(build_preview_doc("python", "print(1)").is_none());
//! ```

mod document;
mod escape;
mod frame;
mod sanitize;

pub use document::{PreviewLanguage, build_preview_doc};
pub use escape::escape_html;
pub use frame::{DEFAULT_SANDBOX, preview_frame, sandbox_allows_scripts};
pub use sanitize::sanitize_html;
