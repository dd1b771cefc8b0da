//! Code fence tracking for line-based lesson scanning.
//!
//! Tracks whether the scanner is inside a fenced code block so that headings
//! and example markers inside code are not mistaken for structure.

/// Fence transition produced by a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FenceEvent<'a> {
    /// Opening fence with its info string (may be empty).
    Open { info: &'a str },
    /// Closing fence.
    Close,
}

/// Tracks code fence state during line-by-line processing.
///
/// Fences use backticks or tildes (three or more). The closing fence must use
/// the same character and be at least as long as the opening fence.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    /// Character used for the current fence (backtick or tilde).
    fence_char: Option<char>,
    /// Length of the opening fence (minimum length for closing).
    fence_len: usize,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Check if currently inside a fenced code block.
    pub(crate) fn in_fence(&self) -> bool {
        self.fence_char.is_some()
    }

    /// Update fence state based on a line.
    ///
    /// Returns the transition when the line opens or closes a fence.
    pub(crate) fn update<'a>(&mut self, line: &'a str) -> Option<FenceEvent<'a>> {
        let trimmed = line.trim_start();

        if let Some(fence_char) = self.fence_char {
            if is_closing_fence(trimmed, fence_char, self.fence_len) {
                self.fence_char = None;
                self.fence_len = 0;
                return Some(FenceEvent::Close);
            }
            return None;
        }

        let (ch, len) = detect_fence(trimmed)?;
        let info = trimmed[len..].trim();
        // A backtick fence cannot carry backticks in its info string; that is
        // inline code such as ```` ```x``` ````.
        if ch == '`' && info.contains('`') {
            return None;
        }
        self.fence_char = Some(ch);
        self.fence_len = len;
        Some(FenceEvent::Open { info })
    }
}

/// Language tag from a fence info string: first word, lowercased.
pub(crate) fn info_language(info: &str) -> String {
    info.split_whitespace()
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Detect if a line starts a code fence.
///
/// Returns the fence character and length if found.
fn detect_fence(trimmed: &str) -> Option<(char, usize)> {
    let first = trimmed.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }

    let count = trimmed.chars().take_while(|&c| c == first).count();
    (count >= 3).then_some((first, count))
}

/// Check if a line is a valid closing fence.
fn is_closing_fence(trimmed: &str, expected_char: char, min_len: usize) -> bool {
    if !trimmed.starts_with(expected_char) {
        return false;
    }

    let count = trimmed.chars().take_while(|&c| c == expected_char).count();
    count >= min_len && trimmed[count..].chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fence_initially() {
        let tracker = FenceTracker::new();
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_backtick_fence_with_info() {
        let mut tracker = FenceTracker::new();

        assert_eq!(
            tracker.update("```javascript\n"),
            Some(FenceEvent::Open { info: "javascript" })
        );
        assert!(tracker.in_fence());

        assert_eq!(tracker.update("let x = 1;\n"), None);
        assert!(tracker.in_fence());

        assert_eq!(tracker.update("```\n"), Some(FenceEvent::Close));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_tilde_fence() {
        let mut tracker = FenceTracker::new();

        assert_eq!(tracker.update("~~~"), Some(FenceEvent::Open { info: "" }));
        assert_eq!(tracker.update("~~~"), Some(FenceEvent::Close));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_shorter_fence_not_closing() {
        let mut tracker = FenceTracker::new();

        tracker.update("````md");
        assert_eq!(tracker.update("```"), None);
        assert!(tracker.in_fence());
        assert_eq!(tracker.update("````"), Some(FenceEvent::Close));
    }

    #[test]
    fn test_closing_fence_with_info_is_content() {
        let mut tracker = FenceTracker::new();

        tracker.update("```");
        // An info string makes it an opening fence, which is content here
        assert_eq!(tracker.update("```python"), None);
        assert!(tracker.in_fence());
    }

    #[test]
    fn test_mixed_fence_chars() {
        let mut tracker = FenceTracker::new();

        tracker.update("```");
        assert_eq!(tracker.update("~~~"), None);
        assert!(tracker.in_fence());
    }

    #[test]
    fn test_indented_fence() {
        let mut tracker = FenceTracker::new();

        assert_eq!(
            tracker.update("   ```css"),
            Some(FenceEvent::Open { info: "css" })
        );
        assert_eq!(tracker.update("  ```  \r\n"), Some(FenceEvent::Close));
    }

    #[test]
    fn test_inline_code_is_not_fence() {
        let mut tracker = FenceTracker::new();

        assert_eq!(tracker.update("``inline code``"), None);
        assert_eq!(tracker.update("```x```"), None);
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_info_language() {
        assert_eq!(info_language("JS title=\"demo\""), "js");
        assert_eq!(info_language(""), "");
    }
}
