//! gh-sso - Organization & Enterprise SSO user listing for GitHub.com

use clap::{CommandFactory, Parser};

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod sso;

use cli::args::GlobalOptions;
use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `warn` by default, `debug` with `--debug`; `RUST_LOG` overrides both.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::List(args) => cli::list::run(&opts, &args).await,
        Commands::Orgs(args) => cli::orgs::run(&opts, &args).await,
        Commands::Repos(args) => cli::repos::run(&opts, &args).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("gh-sso version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "gh-sso",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
