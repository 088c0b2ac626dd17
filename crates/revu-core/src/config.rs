//! Client configuration.
//!
//! Settings are read from `~/.config/revu/config.json` when present and can
//! be overridden per setting through `REVU_*` environment variables.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, RevuError};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Settings for talking to the review backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevuConfig {
    /// Base URL of the backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// When true, a failed ratings fetch is reported to the user instead of
    /// silently leaving the chart empty.
    #[serde(default)]
    pub surface_ratings_errors: bool,
}

impl Default for RevuConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_timeout_secs(),
            surface_ratings_errors: false,
        }
    }
}

impl RevuConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_surface_ratings_errors(mut self, surface: bool) -> Self {
        self.surface_ratings_errors = surface;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Loads configuration from a JSON file. Missing fields fall back to
    /// their defaults; a missing file is an error, use [`load`] for the
    /// optional-file behavior.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RevuError::config(format!(
                "failed to read configuration file at {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            RevuError::config(format!(
                "failed to parse configuration file at {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(config.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.base_url = normalize_base_url(self.base_url);
        self
    }

    fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("REVU_BACKEND_URL") {
            self.base_url = normalize_base_url(url);
        }
        if let Some(raw) = lookup("REVU_TIMEOUT_SECS") {
            self.request_timeout_secs = raw.parse().map_err(|_| {
                RevuError::config(format!("REVU_TIMEOUT_SECS must be a number, got {raw:?}"))
            })?;
        }
        if let Some(raw) = lookup("REVU_SURFACE_RATINGS_ERRORS") {
            self.surface_ratings_errors = parse_bool(&raw).ok_or_else(|| {
                RevuError::config(format!(
                    "REVU_SURFACE_RATINGS_ERRORS must be true or false, got {raw:?}"
                ))
            })?;
        }
        Ok(self)
    }
}

/// Loads the effective configuration: file if present, defaults otherwise,
/// then environment overrides on top.
pub fn load() -> Result<RevuConfig> {
    let base = match default_config_path() {
        Ok(path) if path.exists() => RevuConfig::from_file(&path)?,
        _ => RevuConfig::default(),
    };
    base.apply_overrides(|key| std::env::var(key).ok())
}

/// Returns the path to the configuration file: ~/.config/revu/config.json
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| RevuError::config("could not determine home directory"))?;
    Ok(home.join(".config").join("revu").join("config.json"))
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
