//! `tutor check` command implementation.

use std::path::PathBuf;

use clap::Args;
use tutor_lesson::check_lesson;

use super::load_lesson;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Lesson JSON files.
    #[arg(required = true)]
    lessons: Vec<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if a lesson cannot be loaded or any lesson has
    /// warnings.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let mut total = 0;

        for path in &self.lessons {
            let lesson = load_lesson(path)?;
            let warnings = check_lesson(&lesson);
            if warnings.is_empty() {
                output.success(&format!("{}: ok", path.display()));
                continue;
            }

            output.highlight(&format!("{}:", path.display()));
            for warning in &warnings {
                output.warning(&format!("  {warning}"));
            }
            total += warnings.len();
        }

        if total > 0 {
            return Err(CliError::Validation(format!(
                "found {total} authoring warning(s)"
            )));
        }
        Ok(())
    }
}
