//! Listing API trait for paginated connections

use async_trait::async_trait;

use crate::client::models::{ExternalIdentity, MemberAccount, OrganizationNode, RepositoryNode};
use crate::client::pagination::{Page, PageRequest};
use crate::error::Result;

/// Paginated collection operations against the GitHub GraphQL API
///
/// Every method fetches exactly one page. Walking the whole connection is
/// left to [`paginate`](crate::client::pagination::paginate).
#[async_trait]
pub trait ListingApi: Send + Sync {
    // ========================================================================
    // Enterprises
    // ========================================================================

    /// One page of enterprise members
    async fn enterprise_members(
        &self,
        enterprise: &str,
        page: &PageRequest,
    ) -> Result<Page<MemberAccount>>;

    /// One page of the enterprise identity provider's external identities
    async fn enterprise_saml_identities(
        &self,
        enterprise: &str,
        page: &PageRequest,
    ) -> Result<Page<ExternalIdentity>>;

    /// One page of organizations belonging to the enterprise
    async fn enterprise_organizations(
        &self,
        enterprise: &str,
        page: &PageRequest,
    ) -> Result<Page<OrganizationNode>>;

    // ========================================================================
    // Organizations
    // ========================================================================

    /// One page of the organization identity provider's external identities
    async fn organization_saml_identities(
        &self,
        organization: &str,
        page: &PageRequest,
    ) -> Result<Page<ExternalIdentity>>;

    /// One page of repositories owned by the organization
    async fn organization_repositories(
        &self,
        organization: &str,
        page: &PageRequest,
    ) -> Result<Page<RepositoryNode>>;
}
