//! Section extraction for lesson content.
//!
//! Splits content into `### Code Examples` / `### Explanation` pairs with a
//! line scanner. A section's explanation runs until the next
//! `### Code Examples`, `### Practice` or `## Additional` heading, or the end
//! of the content.

use std::ops::Range;

use serde::Serialize;

use crate::fence::{FenceEvent, FenceTracker, info_language};
use crate::util::{lines_with_offsets, strip_newline, trim_blank_lines};

/// Content split around its code/explanation sections.
///
/// `before_all`, the text covered by `span` and `after_all` together
/// reproduce the original content exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    /// Text before the first section heading.
    pub before_all: String,
    /// Sections in document order.
    pub sections: Vec<Section>,
    /// Text after the last section's explanation.
    pub after_all: String,
    /// Byte range from the first section heading to the end of the last
    /// section's explanation.
    pub span: Range<usize>,
}

/// One matched Code Examples / Explanation pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Language tag of the code fence, lowercased; empty when absent.
    pub code_lang: String,
    /// Body of the first fenced block, or the raw region when unfenced.
    pub code_body: String,
    /// Trimmed explanation markdown.
    pub explanation_md: String,
    /// Text between this section's explanation and the next section, e.g. a
    /// `### Practice` block. Always empty for the last section.
    pub interlude: String,
    /// Byte range from the Code Examples heading to the end of the explanation.
    pub span: Range<usize>,
}

/// Structural heading recognised by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    CodeExamples,
    Explanation,
    Practice,
    Additional,
}

/// Scanner state.
#[derive(Debug, Clone, Copy)]
enum State {
    /// Looking for the next Code Examples heading.
    Seeking,
    /// Inside the code region, waiting for the Explanation heading.
    InCode {
        start: usize,
        line: usize,
        code_start: usize,
    },
    /// Inside the explanation, waiting for a terminator.
    InExplanation {
        start: usize,
        code: (usize, usize),
        explanation_start: usize,
    },
}

/// Extract code/explanation sections from lesson content.
///
/// Returns `None` when the content has no complete section, in which case it
/// should be rendered as ordinary markdown.
///
/// # Example
///
/// ```
/// use tutor_lesson::extract_sections;
///
/// let doc = extract_sections("### Code Examples\n```css\np {}\n```\n### Explanation\nStyles paragraphs.").unwrap();
/// assert_eq!(doc.sections[0].code_lang, "css");
/// assert_eq!(doc.sections[0].code_body, "p {}");
/// assert_eq!(doc.sections[0].explanation_md, "Styles paragraphs.");
///
/// assert!(extract_sections("# Just a heading").is_none());
/// ```
pub fn extract_sections(raw: &str) -> Option<ParsedDocument> {
    SectionExtractor::new().extract(raw)
}

/// Section extractor that also reports authoring problems.
///
/// Extraction itself never fails; [`warnings`](Self::warnings) lists what was
/// skipped or guessed, with 1-based line numbers.
#[derive(Debug, Default)]
pub struct SectionExtractor {
    warnings: Vec<String>,
}

impl SectionExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings from the last [`extract`](Self::extract) call.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Consume the extractor and return its warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }

    /// Split `raw` into sections.
    pub fn extract(&mut self, raw: &str) -> Option<ParsedDocument> {
        self.warnings.clear();

        let mut state = State::Seeking;
        let mut sections = Vec::new();

        for (line_num, offset, line) in lines_with_offsets(raw) {
            let Some(heading) = classify_heading(line) else {
                continue;
            };
            let line_end = offset + line.len();

            state = match (state, heading) {
                (State::Seeking, Heading::CodeExamples) => State::InCode {
                    start: offset,
                    line: line_num,
                    code_start: line_end,
                },
                (State::InCode { start, code_start, .. }, Heading::Explanation) => {
                    State::InExplanation {
                        start,
                        code: (code_start, offset),
                        explanation_start: line_end,
                    }
                }
                (
                    State::InExplanation {
                        start,
                        code,
                        explanation_start,
                    },
                    Heading::CodeExamples | Heading::Practice | Heading::Additional,
                ) => {
                    sections.push(self.build_section(raw, start..offset, code, explanation_start));
                    if heading == Heading::CodeExamples {
                        State::InCode {
                            start: offset,
                            line: line_num,
                            code_start: line_end,
                        }
                    } else {
                        State::Seeking
                    }
                }
                (state, _) => state,
            };
        }

        match state {
            State::InExplanation {
                start,
                code,
                explanation_start,
            } => {
                sections.push(self.build_section(raw, start..raw.len(), code, explanation_start));
            }
            State::InCode { line, .. } => {
                self.warnings.push(format!(
                    "line {line}: Code Examples heading without a following Explanation heading"
                ));
            }
            State::Seeking => {}
        }

        tracing::debug!(
            sections = sections.len(),
            warnings = self.warnings.len(),
            "Extracted lesson sections"
        );

        let first = sections.first()?.span.start;
        let last = sections.last()?.span.end;

        // Text between consecutive sections belongs to the earlier one
        let starts: Vec<usize> = sections.iter().skip(1).map(|s| s.span.start).collect();
        for (section, next_start) in sections.iter_mut().zip(starts) {
            section.interlude = raw[section.span.end..next_start].to_owned();
        }

        Some(ParsedDocument {
            before_all: raw[..first].to_owned(),
            sections,
            after_all: raw[last..].to_owned(),
            span: first..last,
        })
    }

    fn build_section(
        &mut self,
        raw: &str,
        span: Range<usize>,
        code: (usize, usize),
        explanation_start: usize,
    ) -> Section {
        let region = &raw[code.0..code.1];
        let (code_lang, code_body) = match first_fenced_block(region) {
            Some(block) => {
                if !block.closed {
                    let line = line_number_at(raw, code.0 + block.opened_at);
                    self.warnings.push(format!(
                        "line {line}: unclosed code fence, using the rest of the code region"
                    ));
                }
                (block.lang, block.body)
            }
            None => (String::new(), region.trim().to_owned()),
        };

        Section {
            code_lang,
            code_body,
            explanation_md: raw[explanation_start..span.end].trim().to_owned(),
            interlude: String::new(),
            span,
        }
    }
}

/// First fenced block found in a code region.
struct FencedBlock {
    lang: String,
    body: String,
    closed: bool,
    /// Byte offset of the opening fence within the region.
    opened_at: usize,
}

fn first_fenced_block(region: &str) -> Option<FencedBlock> {
    let mut fence = FenceTracker::new();
    let mut opening: Option<(usize, String, usize)> = None;

    for (_, offset, line) in lines_with_offsets(region) {
        match fence.update(line) {
            Some(FenceEvent::Open { info }) if opening.is_none() => {
                opening = Some((offset, info_language(info), offset + line.len()));
            }
            Some(FenceEvent::Close) => {
                if let Some((opened_at, lang, body_start)) = opening.take() {
                    return Some(FencedBlock {
                        lang,
                        body: trim_blank_lines(&region[body_start..offset]).to_owned(),
                        closed: true,
                        opened_at,
                    });
                }
            }
            _ => {}
        }
    }

    opening.map(|(opened_at, lang, body_start)| FencedBlock {
        lang,
        body: trim_blank_lines(&region[body_start..]).to_owned(),
        closed: false,
        opened_at,
    })
}

/// Classify a line as one of the structural headings.
///
/// Matching is case-insensitive on the heading text. Code Examples,
/// Explanation and Practice headings need at least three `#`; Additional
/// needs at least two.
fn classify_heading(line: &str) -> Option<Heading> {
    let trimmed = strip_newline(line).trim_start();
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    if !(2..=6).contains(&level) {
        return None;
    }
    let rest = &trimmed[level..];
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let text = rest.trim().to_ascii_lowercase();

    if text.starts_with("additional") {
        return Some(Heading::Additional);
    }
    if level < 3 {
        return None;
    }
    if text.starts_with("code example") {
        Some(Heading::CodeExamples)
    } else if text.starts_with("explanation") {
        Some(Heading::Explanation)
    } else if text.starts_with("practice") {
        Some(Heading::Practice)
    } else {
        None
    }
}

fn line_number_at(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
