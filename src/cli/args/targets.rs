//! Enterprise and organization target selection
//!
//! Targets come from the command line and from the config file. Command-line
//! names come first, followed by configured ones not already named.

use clap::Args;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::sso::Target;

/// `-e/--enterprise` and `-o/--organization`, both repeatable and comma-delimited
#[derive(Debug, Clone, Args, Default)]
pub struct TargetArgs {
    /// Enterprise slug (repeatable, comma-separated)
    #[arg(short = 'e', long = "enterprise", value_name = "ENTERPRISE", value_delimiter = ',')]
    pub enterprises: Vec<String>,

    /// Organization login (repeatable, comma-separated)
    #[arg(
        short = 'o',
        long = "organization",
        value_name = "ORGANIZATION",
        value_delimiter = ','
    )]
    pub organizations: Vec<String>,
}

impl TargetArgs {
    /// Enterprises first, then organizations, each merged with config.
    ///
    /// Fails with a usage error when nothing is left to process.
    pub fn resolve(&self, config: &Config) -> Result<Vec<Target>> {
        let targets: Vec<Target> = merge_names(&self.enterprises, &config.enterprises)
            .into_iter()
            .map(Target::Enterprise)
            .chain(
                merge_names(&self.organizations, &config.organizations)
                    .into_iter()
                    .map(Target::Organization),
            )
            .collect();

        if targets.is_empty() {
            return Err(Error::Usage(
                "no enterprise or organization given; pass -e/--enterprise or -o/--organization, \
                 or set `enterprises`/`organizations` in the config file"
                    .to_string(),
            ));
        }
        Ok(targets)
    }
}

/// Union of `cli` and `configured`, in that order, trimmed and deduplicated.
pub fn merge_names(cli: &[String], configured: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for name in cli.iter().chain(configured) {
        let name = name.trim();
        if !name.is_empty() && !merged.iter().any(|m| m == name) {
            merged.push(name.to_string());
        }
    }
    merged
}
