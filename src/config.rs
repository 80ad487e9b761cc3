use std::path::Path;

use anyhow::{bail, Result};
use serde::Deserialize;
use tracing::debug;

/// Environment variable that overrides `api.base_url`.
pub const BASE_URL_ENV: &str = "MEASUREMENTS_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.ooni.io";

/// Root configuration structure, deserialized from `.ooni-explorer/config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Measurements API settings.
    pub api: ApiConfig,
    /// Results list settings.
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the measurements API, without a trailing path.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Results per page when `--limit` is not given.
    pub page_size: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { page_size: 50 }
    }
}

impl Config {
    /// Replace the base URL when `base_url` is set and non-empty.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }

    /// Reject settings the client cannot work with.
    pub fn validate(&self) -> Result<()> {
        let url = &self.api.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            bail!("api.base_url must start with http:// or https://, got: {}", url);
        }
        if self.display.page_size == 0 {
            bail!("display.page_size must be at least 1");
        }
        Ok(())
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.ooni-explorer/config.toml`
/// 3. `~/.config/ooni-explorer/config.toml`
/// 4. Built-in [`Config::default`]
///
/// The file (or default) is then overridden by the `MEASUREMENTS_URL`
/// environment variable.
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    let config = read_config_file(project_path, config_override)?;
    Ok(config.with_base_url(std::env::var(BASE_URL_ENV).ok()))
}

fn read_config_file(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        debug!(path = %path.display(), "loading config from --config");
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = project_path.join(".ooni-explorer").join("config.toml");
    if project_config.exists() {
        debug!(path = %project_config.display(), "loading project config");
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("ooni-explorer")
            .join("config.toml");
        if home_config.exists() {
            debug!(path = %home_config.display(), "loading user config");
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.api.base_url, "https://api.ooni.io");
        assert_eq!(cfg.api.timeout_secs, 10);
        assert_eq!(cfg.display.page_size, 50);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_override_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[api]\nbase_url = \"http://localhost:3000\"\ntimeout_secs = 3\n",
        )
        .unwrap();

        let cfg = read_config_file(dir.path(), Some(&path)).unwrap();
        assert_eq!(cfg.api.base_url, "http://localhost:3000");
        assert_eq!(cfg.api.timeout_secs, 3);
        // Missing section falls back to defaults
        assert_eq!(cfg.display.page_size, 50);
    }

    #[test]
    fn test_project_config() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_dir = dir.path().join(".ooni-explorer");
        std::fs::create_dir_all(&cfg_dir).unwrap();
        std::fs::write(cfg_dir.join("config.toml"), "[display]\npage_size = 20\n").unwrap();

        let cfg = read_config_file(dir.path(), None).unwrap();
        assert_eq!(cfg.display.page_size, 20);
        assert_eq!(cfg.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();
        assert!(read_config_file(dir.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_with_base_url() {
        let cfg = Config::default().with_base_url(Some("http://127.0.0.1:8080".to_string()));
        assert_eq!(cfg.api.base_url, "http://127.0.0.1:8080");

        let cfg = Config::default().with_base_url(Some("  ".to_string()));
        assert_eq!(cfg.api.base_url, DEFAULT_BASE_URL);

        let cfg = Config::default().with_base_url(None);
        assert_eq!(cfg.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cfg = Config::default().with_base_url(Some("api.ooni.io".to_string()));
        assert!(cfg.validate().is_err());

        let mut cfg = Config::default();
        cfg.display.page_size = 0;
        assert!(cfg.validate().is_err());
    }
}
