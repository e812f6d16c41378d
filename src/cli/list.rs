//! `list` command: SSO users of enterprises and organizations

use clap::Args;

use crate::cli::CommandContext;
use crate::cli::args::{FetchArgs, GlobalOptions, TargetArgs};
use crate::cli::context::LoadedConfig;
use crate::cli::handlers::{ReportPrinter, run_targets};
use crate::client::GitHubApi;
use crate::error::Result;
use crate::models::{EntityReport, UserDisplay};
use crate::sso::{
    Target, User, fetch_enterprise_members, fetch_enterprise_saml_identities,
    fetch_organization_saml_identities, validate_enterprise, validate_organization,
};

/// Arguments for `gh-sso list`
#[derive(Debug, Clone, Args, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub targets: TargetArgs,

    /// Also fetch enterprise membership to fill in display names
    #[arg(long)]
    pub members: bool,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

/// Run the list command
pub async fn run(opts: &GlobalOptions, args: &ListArgs) -> Result<()> {
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
        |target| list_target(client, target, page_size, args.members),
        |report| printer.emit::<UserDisplay>(report),
    )
    .await;

    printer.finish()?;
    outcome
}

/// Validate one target and collect its SSO users, sorted by login.
pub async fn list_target<C>(
    client: &C,
    target: Target,
    page_size: usize,
    include_members: bool,
) -> Result<EntityReport<User>>
where
    C: GitHubApi + ?Sized,
{
    match target {
        Target::Enterprise(slug) => {
            let mut enterprise = validate_enterprise(client, &slug).await?;
            if include_members {
                fetch_enterprise_members(client, &mut enterprise, page_size).await?;
            }
            fetch_enterprise_saml_identities(client, &mut enterprise, page_size).await?;

            let users = enterprise.users.values().cloned().collect();
            Ok(EntityReport::for_enterprise(&enterprise, users))
        }
        Target::Organization(login) => {
            let mut organization = validate_organization(client, &login).await?;
            fetch_organization_saml_identities(client, &mut organization, page_size).await?;

            let users = organization.users.values().cloned().collect();
            Ok(EntityReport::for_organization(&organization, users))
        }
    }
}
