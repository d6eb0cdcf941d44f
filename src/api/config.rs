//! Client configuration: backend base URL, token storage location and the
//! optional request timeout. Values come from CLI flags or their `CASEFILE_*`
//! environment fallbacks; blank values fall back to the defaults. The token
//! file path is the only value that points at sensitive data.

use std::{env, path::PathBuf, time::Duration};

/// Base URL used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
/// File name of the key-value storage inside the config directory.
const STORAGE_FILE: &str = "storage.json";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub token_file: PathBuf,
    pub timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_file: default_token_file(),
            timeout: None,
        }
    }
}

impl AppConfig {
    /// Builds a config from optional raw values, ignoring blanks.
    #[must_use]
    pub fn new(api_base_url: Option<&str>, token_file: Option<&str>, timeout_secs: Option<u64>) -> Self {
        let mut config = Self::default();

        if let Some(value) = api_base_url.and_then(normalize_value) {
            config.api_base_url = value.trim_end_matches('/').to_string();
        }
        if let Some(value) = token_file.and_then(normalize_value) {
            config.token_file = PathBuf::from(value);
        }
        config.timeout = timeout_secs.filter(|secs| *secs > 0).map(Duration::from_secs);

        config
    }

    /// Same config pointed at another backend, used by tests and embedders.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        if let Some(value) = normalize_value(base_url) {
            self.api_base_url = value.trim_end_matches('/').to_string();
        }
        self
    }
}

/// Resolves `$XDG_CONFIG_HOME/casefile/storage.json`, then
/// `$HOME/.config/casefile/storage.json`, then a project-local fallback.
#[must_use]
pub fn default_token_file() -> PathBuf {
    if let Some(dir) = env::var("XDG_CONFIG_HOME").ok().as_deref().and_then(normalize_value) {
        return PathBuf::from(dir).join("casefile").join(STORAGE_FILE);
    }
    if let Some(home) = env::var("HOME").ok().as_deref().and_then(normalize_value) {
        return PathBuf::from(home)
            .join(".config")
            .join("casefile")
            .join(STORAGE_FILE);
    }
    PathBuf::from(".casefile").join(STORAGE_FILE)
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
