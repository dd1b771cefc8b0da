//! Mapping a section's explanation onto its examples.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::fence::FenceTracker;

/// Matches `Example N` headings, optionally prefixed by `###` or `####`.
///
/// Group 1 is the hash prefix, group 2 the number and group 3 the rest of the
/// line.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(#{3,4}\s*)?Example\s+(\d+)\b\s*(?::|-|\.)?\s*(.*?)\s*$").unwrap()
});

/// Explanation text keyed by example number.
///
/// Look up with [`get`](Self::get): a per-example entry wins, then the shared
/// `general` text, then the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExplanationMap {
    /// Explanations under `Example N` headings.
    pub by_example: BTreeMap<u32, String>,
    /// Whole explanation, set only when there are no `Example N` headings.
    pub general: Option<String>,
    /// Text before the first `Example N` heading.
    pub intro: Option<String>,
}

impl ExplanationMap {
    /// Explanation for an example number.
    pub fn get(&self, number: u32) -> &str {
        self.by_example
            .get(&number)
            .or(self.general.as_ref())
            .map_or("", String::as_str)
    }

    /// Example numbers that have their own explanation.
    pub fn numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.by_example.keys().copied()
    }
}

/// Split explanation markdown on `Example N` headings.
///
/// Headings inside fenced code blocks are ignored. When there are no headings
/// the whole trimmed text becomes the `general` fallback. Repeated numbers are
/// joined with a blank line.
///
/// # Example
///
/// ```
/// use tutor_lesson::split_explanations;
///
/// let map = split_explanations("Example 1\nFirst.\nExample 2\nSecond.");
/// assert_eq!(map.get(1), "First.");
/// assert_eq!(map.get(2), "Second.");
/// assert_eq!(map.general, None);
///
/// let shared = split_explanations("Just text.");
/// assert_eq!(shared.get(7), "Just text.");
/// ```
pub fn split_explanations(explanation_md: &str) -> ExplanationMap {
    let mut fence = FenceTracker::new();
    let mut intro: Vec<&str> = Vec::new();
    let mut entries: Vec<(u32, Vec<&str>)> = Vec::new();

    for line in explanation_md.lines() {
        let was_in_fence = fence.in_fence();
        fence.update(line);

        if !was_in_fence && let Some((number, first_line)) = parse_heading(line) {
            entries.push((number, first_line.into_iter().collect()));
            continue;
        }

        match entries.last_mut() {
            Some((_, lines)) => lines.push(line),
            None => intro.push(line),
        }
    }

    if entries.is_empty() {
        return ExplanationMap {
            general: Some(explanation_md.trim().to_owned()),
            ..ExplanationMap::default()
        };
    }

    let mut by_example: BTreeMap<u32, String> = BTreeMap::new();
    for (number, lines) in entries {
        let text = lines.join("\n").trim().to_owned();
        by_example
            .entry(number)
            .and_modify(|existing| {
                if !text.is_empty() {
                    if !existing.is_empty() {
                        existing.push_str("\n\n");
                    }
                    existing.push_str(&text);
                }
            })
            .or_insert(text);
    }

    let intro = intro.join("\n").trim().to_owned();
    ExplanationMap {
        by_example,
        general: None,
        intro: (!intro.is_empty()).then_some(intro),
    }
}

/// Parse an `Example N` heading.
///
/// For `###`/`####` headings the rest of the line is a title and is dropped;
/// for bare `Example N: text` lines the text starts the explanation.
fn parse_heading(line: &str) -> Option<(u32, Option<&str>)> {
    let caps = HEADING_RE.captures(line)?;
    let number = caps.get(2)?.as_str().parse().ok()?;
    let rest = caps.get(3).map_or("", |m| m.as_str());
    let first_line = (caps.get(1).is_none() && !rest.is_empty()).then_some(rest);
    Some((number, first_line))
}
