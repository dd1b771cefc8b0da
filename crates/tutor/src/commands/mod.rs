//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod preview;
pub(crate) mod quiz;
pub(crate) mod render;
pub(crate) mod sections;

use std::path::{Path, PathBuf};

use clap::Args;
use tutor_config::{CliSettings, Config};
use tutor_lesson::Lesson;
use tutor_render::RenderOptions;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use preview::PreviewArgs;
pub(crate) use quiz::QuizArgs;
pub(crate) use render::RenderArgs;
pub(crate) use sections::SectionsArgs;

/// Configuration arguments shared by commands that honour `tutor.toml`.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover tutor.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quiz feedback delay in milliseconds (overrides config).
    #[arg(long, env = "TUTOR_FEEDBACK_DELAY_MS")]
    feedback_delay_ms: Option<u64>,

    /// Preview iframe sandbox tokens (overrides config).
    #[arg(long)]
    sandbox: Option<String>,

    /// Disable live previews.
    #[arg(long)]
    no_previews: bool,

    /// Disable GitHub Flavored Markdown extensions.
    #[arg(long)]
    no_gfm: bool,
}

impl ConfigArgs {
    /// Load the configuration with these arguments applied on top.
    pub(crate) fn load(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            feedback_delay_ms: self.feedback_delay_ms,
            previews_enabled: self.no_previews.then_some(false),
            sandbox: self.sandbox.clone(),
            gfm: self.no_gfm.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }
        Ok(config)
    }
}

/// Rendering options for a loaded configuration.
pub(crate) fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        gfm: config.render.gfm,
        previews: config.preview.enabled,
        sandbox: config.preview.sandbox.clone(),
        feedback_delay_ms: config.quiz.feedback_delay_ms,
        copy_feedback_ms: config.render.copy_feedback_ms,
    }
}

/// Read and decode a lesson JSON file.
pub(crate) fn load_lesson(path: &Path) -> Result<Lesson, CliError> {
    let json = std::fs::read_to_string(path)?;
    let lesson = Lesson::from_json(&json)?;
    tracing::info!(
        path = %path.display(),
        lesson = %lesson.id,
        quiz = lesson.quiz.len(),
        "Loaded lesson"
    );
    Ok(lesson)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_options_from_config() {
        let mut config = Config::default();
        config.preview.enabled = false;
        config.quiz.feedback_delay_ms = 300;

        let options = render_options(&config);

        assert!(options.gfm);
        assert!(!options.previews);
        assert_eq!(options.sandbox, "allow-same-origin");
        assert_eq!(options.feedback_delay_ms, 300);
        assert_eq!(options.copy_feedback_ms, 2000);
    }

    #[test]
    fn test_load_lesson() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lesson.json");
        std::fs::write(&path, r#"{"_id": "abc", "title": "Selectors", "content": "Text"}"#)
            .unwrap();

        let lesson = load_lesson(&path).unwrap();

        assert_eq!(lesson.id, "abc");
        assert_eq!(lesson.title, "Selectors");
    }

    #[test]
    fn test_load_lesson_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lesson.json");
        std::fs::write(&path, "{").unwrap();

        assert!(matches!(load_lesson(&path), Err(CliError::Lesson(_))));
    }

    #[test]
    fn test_load_lesson_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        assert!(matches!(load_lesson(&path), Err(CliError::Io(_))));
    }
}
