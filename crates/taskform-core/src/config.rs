//! Client configuration.
//!
//! Loaded from an optional TOML file in the platform config directory, then
//! overridden by environment variables. A missing file is not an error; a
//! malformed one is.

use crate::{Result, TaskformError};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Default API host the bindings talk to.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8021";
/// Default base URL of the UI pages used as navigation targets.
pub const DEFAULT_UI_BASE_URL: &str = "http://localhost:63342/ui";

/// Environment variable overriding [`ClientConfig::base_url`].
pub const ENV_BASE_URL: &str = "TASKFORM_BASE_URL";
/// Environment variable overriding [`ClientConfig::ui_base_url`].
pub const ENV_UI_BASE_URL: &str = "TASKFORM_UI_BASE_URL";
/// Environment variable overriding [`ClientConfig::log_json`].
pub const ENV_LOG_JSON: &str = "TASKFORM_LOG_JSON";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API base, e.g. `http://localhost:8021`.
    pub base_url: String,
    /// Base of the UI pages navigated to after login / user creation.
    pub ui_base_url: String,
    /// Emit log lines as JSON instead of human-readable text.
    pub log_json: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            ui_base_url: DEFAULT_UI_BASE_URL.to_string(),
            log_json: false,
        }
    }
}

impl ClientConfig {
    /// Resolves an endpoint path against the API base.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Navigation target after a successful-looking login.
    pub fn task_list_page(&self) -> String {
        format!("{}/get_all_task.html", self.ui_base_url.trim_end_matches('/'))
    }

    /// Navigation target after user creation.
    pub fn auth_page(&self) -> String {
        format!("{}/auth.html", self.ui_base_url.trim_end_matches('/'))
    }

    /// Loads configuration from the default file location plus environment.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Loads configuration, preferring `path` when given.
    ///
    /// An explicitly named file must exist and parse; the default file is
    /// optional. Environment overrides apply either way.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(explicit) => Self::from_file(explicit)?,
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::from_file(&default)?,
                _ => Self::default(),
            },
        };
        config.apply_env();
        Ok(config)
    }

    /// Parses a TOML config file. Unset keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            TaskformError::config(format!("reading {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&text)?)
    }

    /// `$CONFIG_DIR/taskform/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("taskform").join("config.toml"))
    }

    fn apply_env(&mut self) {
        if let Ok(value) = env::var(ENV_BASE_URL) {
            self.base_url = value;
        }
        if let Ok(value) = env::var(ENV_UI_BASE_URL) {
            self.ui_base_url = value;
        }
        if let Ok(value) = env::var(ENV_LOG_JSON) {
            self.log_json = matches!(value.as_str(), "1" | "true" | "yes");
        }
    }
}
