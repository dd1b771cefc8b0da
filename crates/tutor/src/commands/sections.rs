//! `tutor sections` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use tutor_lesson::{Lesson, ParsedDocument, SectionExtractor};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sections command.
#[derive(Args)]
pub(crate) struct SectionsArgs {
    /// Lesson JSON file, or a markdown file holding lesson content.
    file: PathBuf,
}

impl SectionsArgs {
    /// Execute the sections command.
    ///
    /// Prints the parsed document as JSON, or `null` when the content has no
    /// code/explanation sections.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid lesson JSON.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let content = read_content(&self.file)?;

        let (parsed, warnings) = parse(&content);
        for warning in &warnings {
            output.warning(&format!("Warning: {warning}"));
        }
        if parsed.is_none() {
            output.info("No code/explanation sections found");
        }

        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &parsed)?;
        writeln!(stdout)?;
        Ok(())
    }
}

/// Lesson content from a lesson JSON file or a plain markdown file.
fn read_content(path: &Path) -> Result<String, CliError> {
    let text = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        || text.trim_start().starts_with('{');
    if is_json {
        Ok(Lesson::from_json(&text)?.content)
    } else {
        Ok(text)
    }
}

fn parse(content: &str) -> (Option<ParsedDocument>, Vec<String>) {
    let mut extractor = SectionExtractor::new();
    let parsed = extractor.extract(content);
    (parsed, extractor.into_warnings())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_read_content_from_lesson_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lesson.json");
        std::fs::write(&path, r##"{"title": "T", "content": "# Body"}"##).unwrap();

        assert_eq!(read_content(&path).unwrap(), "# Body");
    }

    #[test]
    fn test_read_content_from_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lesson.md");
        std::fs::write(&path, "### Code Examples\nx\n").unwrap();

        assert_eq!(read_content(&path).unwrap(), "### Code Examples\nx\n");
    }

    #[test]
    fn test_parse_reports_warnings() {
        let (parsed, warnings) = parse("### Code Examples\n```js\nx()\n");
        assert!(parsed.is_none());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_parsed_document_json_shape() {
        let (parsed, _) = parse("### Code Examples\n```js\nx()\n```\n### Explanation\nCalls x.");
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["sections"][0]["codeLang"], "js");
        assert_eq!(json["sections"][0]["codeBody"], "x()");
        assert_eq!(json["sections"][0]["explanationMd"], "Calls x.");
    }
}
