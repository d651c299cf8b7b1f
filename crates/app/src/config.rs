//! Application configuration, loaded from a TOML file. Every field has a
//! default so an absent or partial file is fine.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use voxterm_automation::types::AutomationConfig;
use voxterm_foundation::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Master switch for OS automation. When off, the app runs against the
    /// inert channel: useful for dry runs and environments without
    /// automation access.
    #[serde(default = "default_true")]
    pub automation_enabled: bool,

    /// Replaces the built-in terminal catalog when set.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    #[serde(default)]
    pub automation: AutomationConfig,

    #[serde(default)]
    pub formatting: FormattingConfig,
}

/// Settings for the optional reformatting pass. The default build wires the
/// passthrough formatter; a host application substitutes its AI-backed
/// `TextFormatter` implementation here.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Instructions forwarded to the formatter with every transcript.
    #[serde(default)]
    pub instructions: Option<String>,

    /// Model override forwarded to the formatter.
    #[serde(default)]
    pub model: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            automation_enabled: default_true(),
            catalog_path: None,
            automation: AutomationConfig::default(),
            formatting: FormattingConfig::default(),
        }
    }
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            instructions: None,
            model: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("read {}: {}", path.display(), e)))?;
        toml::from_str(&text)
            .map_err(|e| AppError::Config(format!("parse {}: {}", path.display(), e)))
    }

    /// Load the file at `path`, or fall back to defaults when it does not
    /// exist. A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_files_fill_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [automation]
            min_dispatch_interval_ms = 1500

            [formatting]
            enabled = true
            "#,
        )
        .unwrap();
        assert!(config.automation_enabled);
        assert_eq!(config.automation.min_dispatch_interval_ms, 1500);
        assert_eq!(config.automation.duplicate_text_window_ms, 10_000);
        assert!(config.formatting.enabled);
        assert!(config.formatting.instructions.is_none());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert!(config.automation_enabled);
        assert!(!config.formatting.enabled);
    }

    #[test]
    fn malformed_files_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("voxterm.toml");
        std::fs::write(&path, "automation_enabled = \"maybe\"").unwrap();
        assert!(AppConfig::load_or_default(&path).is_err());
    }
}
