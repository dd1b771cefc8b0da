//! Splitting a section's code body into labeled examples.
//!
//! Authors concatenate several snippets into one code block and separate them
//! with comment markers:
//!
//! ```text
//! // Example 1: Declaring
//! let a = 1;
//! # Example 2 - Python style
//! b = 2
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::util::trim_blank_lines;

/// Title used when a body has no markers at all.
const UNMARKED_TITLE: &str = "Code Example";

/// Matches `// Example N` and `# Example N` marker lines with an optional
/// `:` or `-` separated title.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?://|#)\s*Example\s+(\d+)\s*(?::|-)?\s*(.*?)\s*$").unwrap()
});

/// One labeled snippet within a section's code body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Example {
    /// Example number from the marker; `1` for unmarked code.
    pub number: u32,
    /// Display title, e.g. `Example 2: Constants`.
    pub title: String,
    /// Snippet code with surrounding blank lines removed.
    pub code: String,
}

/// Example being accumulated.
struct Pending<'a> {
    number: u32,
    title: String,
    lines: Vec<&'a str>,
}

impl Pending<'_> {
    fn finish(self) -> Example {
        Example {
            number: self.number,
            title: self.title,
            code: trim_blank_lines(&self.lines.join("\n")).to_owned(),
        }
    }
}

/// Split a code body into examples on `Example N` comment markers.
///
/// Lines before the first marker form an implicit "Example 1" once a
/// non-blank line is seen. A body without any marker becomes a single example
/// titled "Code Example". Always returns at least one example.
///
/// # Example
///
/// ```
/// use tutor_lesson::split_examples;
///
/// let examples = split_examples("// Example 1: intro\nfoo();\n// Example 2\nbar();");
/// assert_eq!(examples.len(), 2);
/// assert_eq!(examples[0].title, "Example 1: intro");
/// assert_eq!(examples[1].code, "bar();");
/// ```
pub fn split_examples(code_body: &str) -> Vec<Example> {
    let mut examples = Vec::new();
    let mut current: Option<Pending<'_>> = None;
    let mut saw_marker = false;

    for line in code_body.lines() {
        if let Some((number, title)) = parse_marker(line) {
            examples.extend(current.take().map(Pending::finish));
            saw_marker = true;
            current = Some(Pending {
                number,
                title,
                lines: Vec::new(),
            });
            continue;
        }

        match current.as_mut() {
            Some(pending) => pending.lines.push(line),
            None if !line.trim().is_empty() => {
                current = Some(Pending {
                    number: 1,
                    title: "Example 1".to_owned(),
                    lines: vec![line],
                });
            }
            None => {}
        }
    }
    examples.extend(current.map(Pending::finish));

    match examples.len() {
        0 => vec![Example {
            number: 1,
            title: UNMARKED_TITLE.to_owned(),
            code: trim_blank_lines(code_body).to_owned(),
        }],
        1 if !saw_marker => {
            examples[0].title = UNMARKED_TITLE.to_owned();
            examples
        }
        _ => examples,
    }
}

/// Parse an example marker line into its number and display title.
fn parse_marker(line: &str) -> Option<(u32, String)> {
    let caps = MARKER_RE.captures(line)?;
    let number: u32 = caps[1].parse().ok()?;
    let rest = &caps[2];
    let title = if rest.is_empty() {
        format!("Example {number}")
    } else {
        format!("Example {number}: {rest}")
    };
    Some((number, title))
}
