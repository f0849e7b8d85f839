//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::menu::{DEFAULT_VAR_NAME, Sidebar, is_js_identifier};

/// Sidebar tool configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Table file replacing the built-in one (from SIDEBAR_FILE).
    pub sidebar_file: Option<PathBuf>,

    /// Variable name for script export (default: sidebar_info).
    pub var_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let sidebar_file = lookup("SIDEBAR_FILE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let var_name = lookup("SIDEBAR_VAR_NAME")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_VAR_NAME.to_string());

        if !is_js_identifier(&var_name) {
            anyhow::bail!("SIDEBAR_VAR_NAME must be a JavaScript identifier, got '{var_name}'");
        }

        Ok(Self {
            sidebar_file,
            var_name,
        })
    }

    /// Replace the table file when `file` is set (e.g., from a `--file` flag).
    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        if let Some(file) = file {
            self.sidebar_file = Some(file);
        }
        self
    }

    /// Where the configured table comes from, for messages.
    pub fn source(&self) -> String {
        match &self.sidebar_file {
            Some(path) => path.display().to_string(),
            None => "built-in table".to_string(),
        }
    }

    /// The configured table: the file when one is set, the built-in table otherwise.
    pub fn sidebar(&self) -> Result<Sidebar> {
        match &self.sidebar_file {
            Some(path) => {
                let sidebar = Sidebar::load(path)
                    .with_context(|| format!("failed to load sidebar from {}", path.display()))?;
                info!(path = %path.display(), groups = sidebar.len(), "Using sidebar file");
                Ok(sidebar)
            }
            None => Ok(Sidebar::builtin()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sidebar_file: None,
            var_name: DEFAULT_VAR_NAME.to_string(),
        }
    }
}
