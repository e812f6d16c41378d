//! `repos` command: repositories of organizations, or of every organization
//! in an enterprise

use clap::Args;

use crate::cli::CommandContext;
use crate::cli::args::{FetchArgs, GlobalOptions, TargetArgs};
use crate::cli::context::LoadedConfig;
use crate::cli::handlers::{ReportPrinter, run_targets};
use crate::client::GitHubApi;
use crate::error::Result;
use crate::models::{EntityReport, RepoDisplay};
use crate::sso::{
    Target, fetch_enterprise_repositories, fetch_organization_repositories, validate_enterprise,
    validate_organization,
};

/// Arguments for `gh-sso repos`
#[derive(Debug, Clone, Args, Default)]
pub struct ReposArgs {
    #[command(flatten)]
    pub targets: TargetArgs,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

/// Run the repos command
pub async fn run(opts: &GlobalOptions, args: &ReposArgs) -> Result<()> {
    let loaded = LoadedConfig::load(opts)?;
    let targets = args.targets.resolve(&loaded.config)?;
    let ctx = CommandContext::new(opts, loaded)?;
    let page_size = ctx.page_size(args.fetch.page_size);
    let client = &ctx.client;

    let mut printer = ReportPrinter::new(ctx.format);
    let outcome = run_targets(
        targets,
        usize::from(args.fetch.concurrency),
        args.fetch.fail_fast,
        |target| target_repos(client, target, page_size),
        |report| printer.emit::<RepoDisplay>(report),
    )
    .await;

    printer.finish()?;
    outcome
}

/// Validate one target and list its repositories, sorted by organization
/// then name.
pub async fn target_repos<C>(
    client: &C,
    target: Target,
    page_size: usize,
) -> Result<EntityReport<RepoDisplay>>
where
    C: GitHubApi + ?Sized,
{
    match target {
        Target::Enterprise(slug) => {
            let mut enterprise = validate_enterprise(client, &slug).await?;
            fetch_enterprise_repositories(client, &mut enterprise, page_size).await?;

            let rows = enterprise
                .organizations
                .values()
                .flat_map(RepoDisplay::rows_for)
                .collect();
            Ok(EntityReport::for_enterprise(&enterprise, rows))
        }
        Target::Organization(login) => {
            let mut organization = validate_organization(client, &login).await?;
            fetch_organization_repositories(client, &mut organization, page_size).await?;

            let rows = RepoDisplay::rows_for(&organization);
            Ok(EntityReport::for_organization(&organization, rows))
        }
    }
}
