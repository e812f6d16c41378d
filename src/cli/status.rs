//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::{LoadedConfig, resolve_format};
use crate::client::DEFAULT_PAGE_SIZE;
use crate::config::CONFIG_FILE_NAMES;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "gh-sso Configuration Status".bold());

    let LoadedConfig { config, path } = LoadedConfig::load(opts)?;

    match path {
        Some(path) => println!("Config file: {}", path.display().to_string().cyan()),
        None => {
            println!("{} No config file found", "○".dimmed());
            println!(
                "  → Create {} in your home directory to set defaults",
                CONFIG_FILE_NAMES[0].cyan()
            );
        }
    }

    println!();

    if config.validate_auth().is_ok() {
        println!("{} GitHub token configured", "✓".green());
    } else {
        println!("{} GitHub token not configured", "✗".red());
        println!("  → Set `token` in the config file or export GH_SSO_TOKEN");
    }

    if config.enterprises.is_empty() {
        println!("{} No default enterprises", "○".dimmed());
    } else {
        println!(
            "{} Default enterprises: {}",
            "✓".green(),
            config.enterprises.join(", ")
        );
    }

    if config.organizations.is_empty() {
        println!("{} No default organizations", "○".dimmed());
    } else {
        println!(
            "{} Default organizations: {}",
            "✓".green(),
            config.organizations.join(", ")
        );
    }

    println!("{} API endpoint: {}", "○".dimmed(), config.api_url().cyan());

    let format = resolve_format(opts, &config)?;
    let page_size = config.preferences.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    println!(
        "{} Output format: {:?}, page size: {}",
        "○".dimmed(),
        format,
        page_size
    );

    println!();
    Ok(())
}
