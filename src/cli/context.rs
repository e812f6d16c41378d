//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, authentication validation, and client initialization.

use std::path::PathBuf;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{DEFAULT_PAGE_SIZE, GitHubClient, MAX_PAGE_SIZE, RetryPolicy};
use crate::config::Config;
use crate::error::Result;

/// Config file contents plus where they came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
}

impl LoadedConfig {
    /// Load config for `opts`, applying environment and `--api-url` overrides.
    pub fn load(opts: &GlobalOptions) -> Result<Self> {
        let (mut config, path) = Config::load_at(opts.config_ref())?;
        if let Some(url) = opts.api_url_ref() {
            config.api_url = Some(url.to_string());
        }
        Ok(Self { config, path })
    }
}

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: Config,
    /// Authenticated GraphQL client
    pub client: GitHubClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a context from already-loaded configuration.
    ///
    /// This handles:
    /// - Validating authentication (token present)
    /// - Resolving the output format (flag > config preference > plain)
    /// - Creating the API client with the configured retry count
    ///
    /// # Errors
    /// Returns error if the token is missing or a preference is invalid.
    pub fn new(opts: &GlobalOptions, loaded: LoadedConfig) -> Result<Self> {
        let config = loaded.config;
        let token = config.validate_auth()?;
        let format = resolve_format(opts, &config)?;

        let retry = config
            .preferences
            .retries
            .map(RetryPolicy::with_retries)
            .unwrap_or_default();
        let client = GitHubClient::new(token, config.api_url())?.with_retry_policy(retry);

        debug!(
            "Using {} (format: {:?}, retries: {})",
            client.api_url(),
            format,
            retry.max_retries
        );

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Page size: flag, then config preference, then 100; clamped to 1..=100.
    pub fn page_size(&self, flag: Option<u16>) -> usize {
        flag.map(usize::from)
            .or(self.config.preferences.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

/// Output format: flag/env, then config preference, then plain.
pub fn resolve_format(opts: &GlobalOptions, config: &Config) -> Result<OutputFormat> {
    if let Some(format) = opts.format {
        return Ok(format);
    }
    match config.preferences.format.as_deref() {
        Some(value) => OutputFormat::from_config(value),
        None => Ok(OutputFormat::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preferences;
    use crate::error::{ConfigError, Error};

    fn loaded(config: Config) -> LoadedConfig {
        LoadedConfig { config, path: None }
    }

    fn with_token() -> Config {
        Config {
            token: Some("ghp_test".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_requires_token() {
        let result = CommandContext::new(&GlobalOptions::default(), loaded(Config::default()));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingToken))
        ));
    }

    #[test]
    fn test_api_url_from_config() {
        let config = Config {
            api_url: Some("http://localhost:9999/graphql".to_string()),
            ..with_token()
        };
        let ctx = CommandContext::new(&GlobalOptions::default(), loaded(config)).unwrap();
        assert_eq!(ctx.client.api_url(), "http://localhost:9999/graphql");
    }

    #[test]
    fn test_format_precedence() {
        let config = Config {
            preferences: Preferences {
                format: Some("table".to_string()),
                ..Default::default()
            },
            ..with_token()
        };

        let ctx = CommandContext::new(&GlobalOptions::default(), loaded(config.clone())).unwrap();
        assert_eq!(ctx.format, OutputFormat::Table);

        let opts = GlobalOptions {
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let ctx = CommandContext::new(&opts, loaded(config)).unwrap();
        assert_eq!(ctx.format, OutputFormat::Json);

        let ctx = CommandContext::new(&GlobalOptions::default(), loaded(with_token())).unwrap();
        assert_eq!(ctx.format, OutputFormat::Plain);
    }

    #[test]
    fn test_invalid_format_preference() {
        let config = Config {
            preferences: Preferences {
                format: Some("fancy".to_string()),
                ..Default::default()
            },
            ..with_token()
        };
        let result = CommandContext::new(&GlobalOptions::default(), loaded(config));
        assert!(matches!(result, Err(Error::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_page_size_precedence_and_clamp() {
        let config = Config {
            preferences: Preferences {
                page_size: Some(500),
                ..Default::default()
            },
            ..with_token()
        };
        let ctx = CommandContext::new(&GlobalOptions::default(), loaded(config)).unwrap();

        assert_eq!(ctx.page_size(Some(25)), 25);
        assert_eq!(ctx.page_size(None), MAX_PAGE_SIZE);

        let ctx = CommandContext::new(&GlobalOptions::default(), loaded(with_token())).unwrap();
        assert_eq!(ctx.page_size(None), DEFAULT_PAGE_SIZE);
    }
}
