//! `orgs` command: organizations belonging to enterprises

use clap::Args;

use crate::cli::CommandContext;
use crate::cli::args::{FetchArgs, GlobalOptions, merge_names};
use crate::cli::context::LoadedConfig;
use crate::cli::handlers::{ReportPrinter, run_targets};
use crate::client::GitHubApi;
use crate::error::{Error, Result};
use crate::models::{EntityReport, OrgDisplay};
use crate::sso::{Target, fetch_enterprise_organizations, validate_enterprise};

/// Arguments for `gh-sso orgs`
#[derive(Debug, Clone, Args, Default)]
pub struct OrgsArgs {
    /// Enterprise slug (repeatable, comma-separated)
    #[arg(short = 'e', long = "enterprise", value_name = "ENTERPRISE", value_delimiter = ',')]
    pub enterprises: Vec<String>,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

/// Run the orgs command
pub async fn run(opts: &GlobalOptions, args: &OrgsArgs) -> Result<()> {
    let loaded = LoadedConfig::load(opts)?;
    let targets: Vec<Target> = merge_names(&args.enterprises, &loaded.config.enterprises)
        .into_iter()
        .map(Target::Enterprise)
        .collect();
    if targets.is_empty() {
        return Err(Error::Usage(
            "no enterprise given; pass -e/--enterprise or set `enterprises` in the config file"
                .to_string(),
        ));
    }

    let ctx = CommandContext::new(opts, loaded)?;
    let page_size = ctx.page_size(args.fetch.page_size);
    let client = &ctx.client;

    let mut printer = ReportPrinter::new(ctx.format);
    let outcome = run_targets(
        targets,
        usize::from(args.fetch.concurrency),
        args.fetch.fail_fast,
        |target| enterprise_orgs(client, target, page_size),
        |report| printer.emit::<OrgDisplay>(report),
    )
    .await;

    printer.finish()?;
    outcome
}

/// Validate an enterprise and list its organizations, sorted by login.
pub async fn enterprise_orgs<C>(
    client: &C,
    target: Target,
    page_size: usize,
) -> Result<EntityReport<OrgDisplay>>
where
    C: GitHubApi + ?Sized,
{
    let mut enterprise = validate_enterprise(client, target.name()).await?;
    fetch_enterprise_organizations(client, &mut enterprise, page_size).await?;

    let rows = enterprise
        .organizations
        .values()
        .map(OrgDisplay::from)
        .collect();
    Ok(EntityReport::for_enterprise(&enterprise, rows))
}
