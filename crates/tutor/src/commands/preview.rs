//! `tutor preview` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tutor_preview::{build_preview_doc, preview_frame};

use super::ConfigArgs;
use crate::error::CliError;

/// Arguments for the preview command.
#[derive(Args)]
pub(crate) struct PreviewArgs {
    /// File holding the code snippet.
    file: PathBuf,

    /// Snippet language (html, css, ...). Empty detects markup by content.
    #[arg(short, long, default_value = "")]
    lang: String,

    /// Wrap the document in a sandboxed iframe.
    #[arg(long)]
    frame: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl PreviewArgs {
    /// Execute the preview command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the snippet has no
    /// preview.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let code = std::fs::read_to_string(&self.file)?;
        let html = if self.frame {
            let config = self.config.load()?;
            preview(&self.lang, &code, Some(&config.preview.sandbox))?
        } else {
            preview(&self.lang, &code, None)?
        };

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{html}")?;
        Ok(())
    }
}

/// Preview document for a snippet, optionally framed with `sandbox`.
fn preview(lang: &str, code: &str, sandbox: Option<&str>) -> Result<String, CliError> {
    let doc = build_preview_doc(lang, code).ok_or_else(|| {
        CliError::Validation(format!(
            "no preview available for language {:?}",
            lang.trim().to_ascii_lowercase()
        ))
    })?;
    Ok(match sandbox {
        Some(sandbox) => preview_frame(&doc, sandbox),
        None => doc,
    })
}
