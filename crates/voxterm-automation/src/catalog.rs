//! # Terminal Application Catalog
//!
//! The static table of terminal-like applications the dispatcher knows how
//! to target. Loaded once at startup and immutable afterwards; adding a
//! terminal is a data change (built-in table below, or a TOML catalog file),
//! never a logic change.

use crate::types::TerminalApp;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog contains no terminals")]
    Empty,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    terminals: Vec<TerminalApp>,
}

/// Immutable catalog of known terminal-like applications, in priority order.
#[derive(Debug, Clone)]
pub struct TerminalCatalog {
    terminals: Vec<TerminalApp>,
}

impl TerminalCatalog {
    /// The compiled-in default catalog.
    pub fn builtin() -> Self {
        let entry = |process: &str, app_id: &str, display: &str| TerminalApp {
            process_name: process.to_string(),
            app_id: app_id.to_string(),
            display_name: display.to_string(),
        };
        Self {
            terminals: vec![
                entry("Terminal", "com.apple.Terminal", "Terminal"),
                entry("iTerm2", "com.googlecode.iterm2", "iTerm2"),
                entry("Code", "com.microsoft.VSCode", "Visual Studio Code"),
                entry("Warp", "dev.warp.Warp-Stable", "Warp"),
                entry("alacritty", "org.alacritty", "Alacritty"),
                entry("kitty", "net.kovidgoyal.kitty", "kitty"),
                entry("wezterm-gui", "com.github.wez.wezterm", "WezTerm"),
                entry("ghostty", "com.mitchellh.ghostty", "Ghostty"),
                entry("Hyper", "co.zeit.hyper", "Hyper"),
            ],
        }
    }

    /// Parse a catalog from TOML text. The file replaces the built-in table
    /// entirely; priority is file order.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let parsed: CatalogFile = toml::from_str(text)?;
        if parsed.terminals.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self {
            terminals: parsed.terminals,
        })
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn entries(&self) -> &[TerminalApp] {
        &self.terminals
    }

    pub fn len(&self) -> usize {
        self.terminals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty()
    }

    /// Look up a catalog entry by application identifier.
    pub fn find_by_app_id(&self, app_id: &str) -> Option<&TerminalApp> {
        self.terminals.iter().find(|t| t.app_id == app_id)
    }

    /// Look up a catalog entry by process name.
    pub fn find_by_process_name(&self, process_name: &str) -> Option<&TerminalApp> {
        self.terminals.iter().find(|t| t.process_name == process_name)
    }
}
