//! Rendering options.

use tutor_preview::DEFAULT_SANDBOX;

/// Options for [`LessonView`](crate::LessonView) rendering.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Enable GitHub Flavored Markdown (tables, strikethrough, task lists).
    pub gfm: bool,
    /// Build live previews for examples that support them.
    pub previews: bool,
    /// Sandbox tokens for preview frames.
    pub sandbox: String,
    /// Quiz feedback delay handed to the quiz widget, in milliseconds.
    pub feedback_delay_ms: u64,
    /// Copy button feedback duration, in milliseconds.
    pub copy_feedback_ms: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            gfm: true,
            previews: true,
            sandbox: DEFAULT_SANDBOX.to_owned(),
            feedback_delay_ms: 1000,
            copy_feedback_ms: 2000,
        }
    }
}
