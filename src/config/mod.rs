//! Configuration management for gh-sso
//!
//! Configuration is read from `.gh-sso.yaml` in the home directory or the
//! current directory (first match wins), unless an explicit path is given.
//! Environment variables override values from the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_API_URL;
use crate::error::{ConfigError, Result};

/// File names probed in each search directory, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".gh-sso.yaml", ".gh-sso.yml"];

/// Environment variable overriding `token`
pub const ENV_TOKEN: &str = "GH_SSO_TOKEN";
/// Environment variable overriding `enterprises` (comma-separated)
pub const ENV_ENTERPRISES: &str = "GH_SSO_ENTERPRISES";
/// Environment variable overriding `organizations` (comma-separated)
pub const ENV_ORGANIZATIONS: &str = "GH_SSO_ORGANIZATIONS";
/// Environment variable overriding `api_url`
pub const ENV_API_URL: &str = "GH_SSO_API_URL";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Default enterprise slugs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enterprises: Vec<String>,

    /// Default organization logins
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organizations: Vec<String>,

    /// GraphQL endpoint (GitHub Enterprise Server or testing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Items requested per page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    /// Retries for transient API failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
}

impl Config {
    /// Directories searched for a config file, in priority order.
    pub fn search_dirs() -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        if let Some(home) = dirs::home_dir() {
            dirs.push(home);
        }
        if let Ok(cwd) = std::env::current_dir() {
            if !dirs.contains(&cwd) {
                dirs.push(cwd);
            }
        }
        dirs
    }

    /// Find the first config file present in `dirs`.
    pub fn discover(dirs: &[PathBuf]) -> Option<PathBuf> {
        dirs.iter()
            .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
            .find(|path| path.is_file())
    }

    /// Load configuration from an explicit path or by searching the default
    /// locations, then apply environment overrides.
    ///
    /// Returns the config together with the file it was read from, if any.
    /// An explicit path that does not exist is an error; finding nothing
    /// during the search is not.
    pub fn load_at(path: Option<&str>) -> Result<(Self, Option<PathBuf>)> {
        let source = match path {
            Some(p) => Some(PathBuf::from(p)),
            None => Self::discover(&Self::search_dirs()),
        };

        let mut config = match &source {
            Some(p) => Self::load_from(p)?,
            None => {
                log::debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok((config, source))
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        log::debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(ENV_TOKEN).filter(|t| !t.trim().is_empty()) {
            self.token = Some(token.trim().to_string());
        }
        if let Some(list) = lookup(ENV_ENTERPRISES) {
            self.enterprises = split_list(&list);
        }
        if let Some(list) = lookup(ENV_ORGANIZATIONS) {
            self.organizations = split_list(&list);
        }
        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            self.api_url = Some(url.trim().to_string());
        }
    }

    /// Validate that a token is present and return it
    pub fn validate_auth(&self) -> Result<&str> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ConfigError::MissingToken.into()),
        }
    }

    /// GraphQL endpoint, falling back to api.github.com
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}

/// Split a comma-separated list, dropping blanks.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
