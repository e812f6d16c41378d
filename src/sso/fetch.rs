//! Populate validated entities by walking their GitHub connections
//!
//! Every fetch runs the generic [`paginate`] driver over one listing method
//! and folds the pages into the entity's maps with [`aggregate`]. Requests
//! for one entity are strictly sequential.

use log::{debug, warn};

use super::aggregate::{AggregateStats, aggregate};
use super::entity::{Enterprise, Organization, Repository, User};
use crate::client::models::{ExternalIdentity, MemberAccount, OrganizationNode, RepositoryNode};
use crate::client::{GitHubApi, paginate};
use crate::error::Result;

fn member_login(member: &MemberAccount) -> Option<String> {
    member.login.clone().filter(|l| !l.is_empty())
}

fn identity_login(identity: &ExternalIdentity) -> Option<String> {
    identity.login().filter(|l| !l.is_empty()).map(String::from)
}

fn report_unlinked(owner: &str, stats: &AggregateStats) {
    if stats.skipped > 0 {
        warn!(
            "{}: skipped {} SAML identities not linked to a GitHub account",
            owner, stats.skipped
        );
    }
}

/// Merge every enterprise member (login and profile name) into `enterprise.users`.
pub async fn fetch_enterprise_members<C>(
    client: &C,
    enterprise: &mut Enterprise,
    page_size: usize,
) -> Result<AggregateStats>
where
    C: GitHubApi + ?Sized,
{
    let login = enterprise.login.clone();
    let login = login.as_str();
    let users = &mut enterprise.users;
    let mut stats = AggregateStats::default();

    paginate(
        page_size,
        move |page| async move { client.enterprise_members(login, &page).await },
        |items| stats.add(aggregate(users, items, member_login, User::merge_member)),
    )
    .await?;

    debug!("{}: {} members merged", login, stats.inserted + stats.updated);
    Ok(stats)
}

/// Merge every SAML identity of the enterprise's identity provider into
/// `enterprise.users`.
pub async fn fetch_enterprise_saml_identities<C>(
    client: &C,
    enterprise: &mut Enterprise,
    page_size: usize,
) -> Result<AggregateStats>
where
    C: GitHubApi + ?Sized,
{
    let login = enterprise.login.clone();
    let login = login.as_str();
    let users = &mut enterprise.users;
    let mut stats = AggregateStats::default();

    paginate(
        page_size,
        move |page| async move { client.enterprise_saml_identities(login, &page).await },
        |items| stats.add(aggregate(users, items, identity_login, User::merge_identity)),
    )
    .await?;

    report_unlinked(login, &stats);
    Ok(stats)
}

/// Collect the organizations belonging to the enterprise.
pub async fn fetch_enterprise_organizations<C>(
    client: &C,
    enterprise: &mut Enterprise,
    page_size: usize,
) -> Result<AggregateStats>
where
    C: GitHubApi + ?Sized,
{
    let login = enterprise.login.clone();
    let login = login.as_str();
    let organizations = &mut enterprise.organizations;
    let mut stats = AggregateStats::default();

    paginate(
        page_size,
        move |page| async move { client.enterprise_organizations(login, &page).await },
        |items| {
            stats.add(aggregate(
                organizations,
                items,
                |node: &OrganizationNode| Some(node.login.clone()).filter(|l| !l.is_empty()),
                merge_organization,
            ))
        },
    )
    .await?;

    Ok(stats)
}

/// Collect the repositories of every organization in the enterprise,
/// fetching the organization list first if it is still empty.
pub async fn fetch_enterprise_repositories<C>(
    client: &C,
    enterprise: &mut Enterprise,
    page_size: usize,
) -> Result<AggregateStats>
where
    C: GitHubApi + ?Sized,
{
    if enterprise.organizations.is_empty() {
        fetch_enterprise_organizations(client, enterprise, page_size).await?;
    }

    let mut stats = AggregateStats::default();
    for organization in enterprise.organizations.values_mut() {
        stats.add(fetch_organization_repositories(client, organization, page_size).await?);
    }
    Ok(stats)
}

/// Merge every SAML identity of the organization's identity provider into
/// `organization.users`.
pub async fn fetch_organization_saml_identities<C>(
    client: &C,
    organization: &mut Organization,
    page_size: usize,
) -> Result<AggregateStats>
where
    C: GitHubApi + ?Sized,
{
    let login = organization.login.clone();
    let login = login.as_str();
    let users = &mut organization.users;
    let mut stats = AggregateStats::default();

    paginate(
        page_size,
        move |page| async move { client.organization_saml_identities(login, &page).await },
        |items| stats.add(aggregate(users, items, identity_login, User::merge_identity)),
    )
    .await?;

    report_unlinked(login, &stats);
    Ok(stats)
}

/// Collect the repositories owned by the organization.
pub async fn fetch_organization_repositories<C>(
    client: &C,
    organization: &mut Organization,
    page_size: usize,
) -> Result<AggregateStats>
where
    C: GitHubApi + ?Sized,
{
    let login = organization.login.clone();
    let login = login.as_str();
    let repositories = &mut organization.repositories;
    let mut stats = AggregateStats::default();

    paginate(
        page_size,
        move |page| async move { client.organization_repositories(login, &page).await },
        |items| {
            stats.add(aggregate(
                repositories,
                items,
                |node: &RepositoryNode| Some(node.name.clone()).filter(|n| !n.is_empty()),
                |_, node| Repository { name: node.name },
            ))
        },
    )
    .await?;

    Ok(stats)
}

fn merge_organization(existing: Option<Organization>, node: OrganizationNode) -> Organization {
    let mut organization = existing.unwrap_or_default();
    if let Some(name) = node.name.filter(|n| !n.is_empty()) {
        organization.name = name;
    } else if organization.name.is_empty() {
        organization.name = node.login.clone();
    }
    organization.login = node.login;
    organization
}
