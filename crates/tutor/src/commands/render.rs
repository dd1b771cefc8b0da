//! `tutor render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tutor_preview::escape_html;
use tutor_render::LessonView;

use super::{ConfigArgs, load_lesson, render_options};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Lesson JSON file.
    lesson: PathBuf,

    /// Write the page to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit only the lesson fragment, without the page wrapper.
    #[arg(long)]
    fragment: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or lesson cannot be loaded, or
    /// the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let lesson = load_lesson(&self.lesson)?;

        let view = LessonView::build(&lesson, &render_options(&config));
        for warning in &view.warnings {
            output.warning(&format!("Warning: {warning}"));
        }

        let fragment = view.to_html();
        let html = if self.fragment {
            fragment
        } else {
            html_page(&view.title, &fragment)
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, &html)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{html}")?;
            }
        }
        Ok(())
    }
}

/// Wrap a lesson fragment in a standalone page.
fn html_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{body}\n</body>\n</html>",
        escape_html(title)
    )
}
