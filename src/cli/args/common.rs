//! Common CLI types shared across commands

use clap::ValueEnum;

use crate::error::{ConfigError, Result};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain format - fixed-width columns (global default)
    #[default]
    Plain,
    /// Table format - rounded table with every known field
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

impl OutputFormat {
    /// Parse a format name from the config file.
    pub fn from_config(value: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(value.trim(), true).map_err(|_| {
            ConfigError::Invalid(format!(
                "preferences.format must be plain, table or json (got '{}')",
                value
            ))
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plain() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_from_config() {
        assert_eq!(OutputFormat::from_config("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_config(" Table ").unwrap(), OutputFormat::Table);
        assert!(OutputFormat::from_config("pretty").is_err());
    }
}
