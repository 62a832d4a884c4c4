//! Configuration handling for the form

use crate::submission::DEFAULT_BASE_URL;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the submission base URL
pub const BASE_URL_ENV: &str = "SIGNUP_FORM_BASE_URL";

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Root of the API the form is posted to
    pub base_url: Option<String>,
}

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "signup-form", "signup-form-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory the log file is written to
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration, writing a default file on first run so there is
    /// one to edit
    pub fn load_or_init() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_init_at(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_or_init_at(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: FormConfig = serde_json::from_str(&content)?;
            return Ok(config);
        }

        let config = Self::default();
        config.save_to(path)?;
        tracing::info!(path = %path.display(), "wrote default config");
        Ok(config)
    }

    /// Save configuration to file
    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Base URL to submit to: environment, then config file, then default
    pub fn resolve_base_url(&self) -> String {
        self.resolve_base_url_with(std::env::var(BASE_URL_ENV).ok())
    }

    fn resolve_base_url_with(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}
