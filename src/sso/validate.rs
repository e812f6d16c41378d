//! Confirm that user-supplied enterprise and organization names resolve

use log::debug;

use super::entity::{Enterprise, Organization};
use crate::client::GitHubApi;
use crate::client::models::EntityNode;
use crate::error::{ApiError, Error, Result};

/// Resolve an enterprise slug, failing with `NotFound` if GitHub doesn't know it.
pub async fn validate_enterprise<C>(client: &C, slug: &str) -> Result<Enterprise>
where
    C: GitHubApi + ?Sized,
{
    require_name("enterprise", slug)?;
    let node = client.lookup_enterprise(slug).await?;
    let node = resolved("enterprise", slug, node)?;
    debug!("Validated enterprise '{}' ({})", slug, node.id);
    Ok(Enterprise::from_lookup(slug, node))
}

/// Resolve an organization login, failing with `NotFound` if GitHub doesn't know it.
pub async fn validate_organization<C>(client: &C, login: &str) -> Result<Organization>
where
    C: GitHubApi + ?Sized,
{
    require_name("organization", login)?;
    let node = client.lookup_organization(login).await?;
    let node = resolved("organization", login, node)?;
    debug!("Validated organization '{}' ({})", login, node.id);
    Ok(Organization::from_lookup(login, node))
}

fn require_name(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Usage(format!("{} name must not be empty", kind)));
    }
    Ok(())
}

/// A lookup counts as resolved only when it carries a non-empty ID.
fn resolved(kind: &str, name: &str, node: Option<EntityNode>) -> Result<EntityNode> {
    match node {
        Some(node) if !node.id.is_empty() => Ok(node),
        _ => Err(ApiError::NotFound(format!("{} '{}'", kind, name)).into()),
    }
}
