//! Configuration management for the lesson renderer.
//!
//! Parses `tutor.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Every section and
//! field is optional and falls back to its default.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override quiz feedback delay.
    pub feedback_delay_ms: Option<u64>,
    /// Override preview enabled flag.
    pub previews_enabled: Option<bool>,
    /// Override preview sandbox tokens.
    pub sandbox: Option<String>,
    /// Override GFM flag.
    pub gfm: Option<bool>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "tutor.toml";

/// Upper bound for timer settings, in milliseconds.
const MAX_DELAY_MS: u64 = 60_000;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quiz configuration.
    pub quiz: QuizConfig,
    /// Live preview configuration.
    pub preview: PreviewConfig,
    /// Markdown rendering configuration.
    pub render: RenderConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Quiz configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Delay between answering and advancing to the next question.
    pub feedback_delay_ms: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            feedback_delay_ms: 1000,
        }
    }
}

/// Live preview configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Whether previews are offered at all.
    pub enabled: bool,
    /// Sandbox tokens for the preview iframe.
    pub sandbox: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sandbox: "allow-same-origin".to_owned(),
        }
    }
}

/// Markdown rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Enable GitHub Flavored Markdown extensions.
    pub gfm: bool,
    /// How long the copy button shows its result.
    pub copy_feedback_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            gfm: true,
            copy_feedback_ms: 2000,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a delay to be positive and bounded.
fn require_delay(value: u64, field: &str) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Validation(format!("{field} cannot be 0")));
    }
    if value > MAX_DELAY_MS {
        return Err(ConfigError::Validation(format!(
            "{field} cannot exceed {MAX_DELAY_MS}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `tutor.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading and the result is validated
    /// again, so an override cannot smuggle in an invalid value.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// a value is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(delay) = settings.feedback_delay_ms {
            self.quiz.feedback_delay_ms = delay;
        }
        if let Some(enabled) = settings.previews_enabled {
            self.preview.enabled = enabled;
        }
        if let Some(sandbox) = &settings.sandbox {
            self.preview.sandbox.clone_from(sandbox);
        }
        if let Some(gfm) = settings.gfm {
            self.render.gfm = gfm;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        Self::discover_config_from(&std::env::current_dir().ok()?)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_delay(self.quiz.feedback_delay_ms, "quiz.feedback_delay_ms")?;
        require_delay(self.render.copy_feedback_ms, "render.copy_feedback_ms")?;
        self.validate_preview()?;
        Ok(())
    }

    /// Validate preview configuration.
    fn validate_preview(&self) -> Result<(), ConfigError> {
        // Previews run untrusted lesson code; scripts must stay disabled
        if self
            .preview
            .sandbox
            .split_whitespace()
            .any(|token| token.eq_ignore_ascii_case("allow-scripts"))
        {
            return Err(ConfigError::Validation(
                "preview.sandbox cannot contain allow-scripts".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.quiz.feedback_delay_ms, 1000);
        assert!(config.preview.enabled);
        assert_eq!(config.preview.sandbox, "allow-same-origin");
        assert!(config.render.gfm);
        assert_eq!(config.render.copy_feedback_ms, 2000);
        assert_eq!(config.config_path, None);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.quiz.feedback_delay_ms, 1000);
        assert!(config.preview.enabled);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[quiz]
feedback_delay_ms = 1500

[preview]
enabled = false
sandbox = ""

[render]
gfm = false
copy_feedback_ms = 800
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.quiz.feedback_delay_ms, 1500);
        assert!(!config.preview.enabled);
        assert_eq!(config.preview.sandbox, "");
        assert!(!config.render.gfm);
        assert_eq!(config.render.copy_feedback_ms, 800);
    }

    #[test]
    fn test_parse_partial_section_keeps_defaults() {
        let toml = r"
[render]
gfm = false
";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.render.gfm);
        assert_eq!(config.render.copy_feedback_ms, 2000);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[quiz]\nfeedback_delay_ms = 250\n");

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.quiz.feedback_delay_ms, 250);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[quiz\n");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_validates_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[quiz]\nfeedback_delay_ms = 0\n");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: quiz.feedback_delay_ms cannot be 0"
        );
    }

    #[test]
    fn test_load_applies_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[quiz]\nfeedback_delay_ms = 250\n");
        let settings = CliSettings {
            feedback_delay_ms: Some(500),
            previews_enabled: Some(false),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.quiz.feedback_delay_ms, 500);
        assert!(!config.preview.enabled);
        assert!(config.render.gfm);
    }

    #[test]
    fn test_load_rejects_invalid_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        let settings = CliSettings {
            sandbox: Some("allow-scripts".to_owned()),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        let nested = dir.path().join("lessons").join("html");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(Config::discover_config_from(&nested), Some(path));
    }

    #[test]
    fn test_discover_config_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "");
        let nested = dir.path().join("course");
        std::fs::create_dir_all(&nested).unwrap();
        let nearest = write_config(&nested, "");

        assert_eq!(Config::discover_config_from(&nested), Some(nearest));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.quiz.feedback_delay_ms, 1000);
        assert!(config.preview.enabled);
        assert_eq!(config.preview.sandbox, "allow-same-origin");
        assert!(config.render.gfm);
    }

    #[test]
    fn test_apply_cli_settings_sandbox_and_gfm() {
        let mut config = Config::default();
        let settings = CliSettings {
            sandbox: Some(String::new()),
            gfm: Some(false),
            ..Default::default()
        };

        config.apply_cli_settings(&settings);

        assert_eq!(config.preview.sandbox, "");
        assert!(!config.render.gfm);
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_feedback_delay_too_high() {
        let mut config = Config::default();
        config.quiz.feedback_delay_ms = 60_001;

        let err = config.validate().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: quiz.feedback_delay_ms cannot exceed 60000"
        );
    }

    #[test]
    fn test_validate_feedback_delay_upper_bound_inclusive() {
        let mut config = Config::default();
        config.quiz.feedback_delay_ms = 60_000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_copy_feedback_zero() {
        let mut config = Config::default();
        config.render.copy_feedback_ms = 0;

        let err = config.validate().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: render.copy_feedback_ms cannot be 0"
        );
    }

    #[test]
    fn test_validate_sandbox_rejects_scripts() {
        let mut config = Config::default();
        config.preview.sandbox = "allow-same-origin  Allow-Scripts".to_owned();

        let err = config.validate().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: preview.sandbox cannot contain allow-scripts"
        );
    }

    #[test]
    fn test_validate_empty_sandbox_is_valid() {
        let mut config = Config::default();
        config.preview.sandbox = String::new();
        assert!(config.validate().is_ok());
    }
}
