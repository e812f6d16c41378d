//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod context;
pub mod handlers;
pub mod list;
pub mod orgs;
pub mod repos;
pub mod status;

pub use args::OutputFormat;
pub use context::CommandContext;
pub use list::ListArgs;
pub use orgs::OrgsArgs;
pub use repos::ReposArgs;

/// gh-sso - Organization & Enterprise SSO user listing for GitHub.com
#[derive(Parser, Debug)]
#[command(name = "gh-sso")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (plain, table, json)
    #[arg(
        long,
        global = true,
        env = "GH_SSO_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "GH_SSO_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GH_SSO_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Override the GraphQL endpoint
    #[arg(long, global = true, env = "GH_SSO_API_URL", hide = true)]
    pub api_url: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List SSO users of enterprises and organizations
    #[command(after_help = "EXAMPLES:\n  \
        gh-sso list -e acme                      # Enterprise SAML identities\n  \
        gh-sso list -e acme --members            # ...with profile names\n  \
        gh-sso list -o octo,widgets              # Several organizations\n  \
        gh-sso list --format json                # Targets from config, as JSON")]
    List(ListArgs),

    /// List the organizations of enterprises
    Orgs(OrgsArgs),

    /// List repositories of organizations or enterprises
    Repos(ReposArgs),

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Static completions (subcommands/flags only):
  bash:   gh-sso completion bash > /etc/bash_completion.d/gh-sso
  zsh:    gh-sso completion zsh > \"${fpath[1]}/_gh-sso\"
  fish:   gh-sso completion fish > ~/.config/fish/completions/gh-sso.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
