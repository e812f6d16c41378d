//! Mock GitHub API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{ListingApi, LookupApi};
use super::models::{EntityNode, ExternalIdentity, MemberAccount, OrganizationNode, RepositoryNode};
use super::pagination::{Page, PageRequest};
use crate::error::{ApiError, Result};

/// Pages of nodes per owner; page `i` is served for cursor `c{i}`.
type PagesByOwner<T> = Arc<Mutex<HashMap<String, Vec<Vec<T>>>>>;

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
/// Paged responses hand out cursors `c1`, `c2`, ... so tests can assert on
/// the exact cursor sent for each follow-up request.
///
/// # Example
/// ```ignore
/// let mock = MockGitHubClient::new()
///     .with_enterprise("acme", "E_1", "Acme Corp").await
///     .with_enterprise_identity_pages("acme", vec![page1, page2]).await;
///
/// let enterprise = validate_enterprise(&mock, "acme").await?;
/// ```
#[derive(Default)]
pub struct MockGitHubClient {
    /// Enterprises resolvable by slug
    enterprises: Arc<Mutex<HashMap<String, EntityNode>>>,
    /// Organizations resolvable by login
    organizations: Arc<Mutex<HashMap<String, EntityNode>>>,
    member_pages: PagesByOwner<MemberAccount>,
    enterprise_identity_pages: PagesByOwner<ExternalIdentity>,
    enterprise_org_pages: PagesByOwner<OrganizationNode>,
    organization_identity_pages: PagesByOwner<ExternalIdentity>,
    repository_pages: PagesByOwner<RepositoryNode>,
    /// One-shot error and the call index it fires at
    error: Arc<Mutex<Option<(usize, ApiError)>>>,
    /// Owners whose every call fails
    failing_owners: Arc<Mutex<HashSet<String>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub lookup_enterprise: usize,
    pub lookup_organization: usize,
    pub enterprise_members: usize,
    pub enterprise_saml_identities: usize,
    pub enterprise_organizations: usize,
    pub organization_saml_identities: usize,
    pub organization_repositories: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.lookup_enterprise
            + self.lookup_organization
            + self.enterprise_members
            + self.enterprise_saml_identities
            + self.enterprise_organizations
            + self.organization_saml_identities
            + self.organization_repositories
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// The API method called (e.g., "lookup_enterprise", "enterprise_members")
    pub method: String,
    /// Enterprise slug or organization login
    pub owner: String,
    /// Page size for paged calls
    pub first: Option<usize>,
    /// Cursor for paged calls
    pub after: Option<String>,
}

fn entity(id: &str, name: &str) -> EntityNode {
    EntityNode {
        id: id.to_string(),
        name: Some(name.to_string()),
    }
}

impl MockGitHubClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make an enterprise resolvable.
    pub async fn with_enterprise(self, slug: &str, id: &str, name: &str) -> Self {
        self.enterprises
            .lock()
            .await
            .insert(slug.to_string(), entity(id, name));
        self
    }

    /// Make an organization resolvable.
    pub async fn with_organization(self, login: &str, id: &str, name: &str) -> Self {
        self.organizations
            .lock()
            .await
            .insert(login.to_string(), entity(id, name));
        self
    }

    /// Configure enterprise member pages.
    pub async fn with_member_pages(self, enterprise: &str, pages: Vec<Vec<MemberAccount>>) -> Self {
        self.member_pages
            .lock()
            .await
            .insert(enterprise.to_string(), pages);
        self
    }

    /// Configure enterprise SAML identity pages.
    pub async fn with_enterprise_identity_pages(
        self,
        enterprise: &str,
        pages: Vec<Vec<ExternalIdentity>>,
    ) -> Self {
        self.enterprise_identity_pages
            .lock()
            .await
            .insert(enterprise.to_string(), pages);
        self
    }

    /// Configure pages of organizations belonging to an enterprise.
    pub async fn with_enterprise_org_pages(
        self,
        enterprise: &str,
        pages: Vec<Vec<OrganizationNode>>,
    ) -> Self {
        self.enterprise_org_pages
            .lock()
            .await
            .insert(enterprise.to_string(), pages);
        self
    }

    /// Configure organization SAML identity pages.
    pub async fn with_organization_identity_pages(
        self,
        organization: &str,
        pages: Vec<Vec<ExternalIdentity>>,
    ) -> Self {
        self.organization_identity_pages
            .lock()
            .await
            .insert(organization.to_string(), pages);
        self
    }

    /// Configure repository pages of an organization.
    pub async fn with_repository_pages(
        self,
        organization: &str,
        pages: Vec<Vec<RepositoryNode>>,
    ) -> Self {
        self.repository_pages
            .lock()
            .await
            .insert(organization.to_string(), pages);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some((0, error));
        self
    }

    /// Configure an error for the call with zero-based index `call`.
    pub async fn with_error_at(self, call: usize, error: ApiError) -> Self {
        *self.error.lock().await = Some((call, error));
        self
    }

    /// Make every call for `owner` fail with a server error.
    pub async fn with_failing_owner(self, owner: &str) -> Self {
        self.failing_owners.lock().await.insert(owner.to_string());
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Record the call, then fail it if an error is due.
    async fn record(&self, method: &str, owner: &str, page: Option<&PageRequest>) -> Result<()> {
        let call_index = {
            let mut counts = self.call_count.lock().await;
            let index = counts.total();
            match method {
                "lookup_enterprise" => counts.lookup_enterprise += 1,
                "lookup_organization" => counts.lookup_organization += 1,
                "enterprise_members" => counts.enterprise_members += 1,
                "enterprise_saml_identities" => counts.enterprise_saml_identities += 1,
                "enterprise_organizations" => counts.enterprise_organizations += 1,
                "organization_saml_identities" => counts.organization_saml_identities += 1,
                "organization_repositories" => counts.organization_repositories += 1,
                _ => {}
            }
            index
        };

        self.captured_requests.lock().await.push(CapturedRequest {
            method: method.to_string(),
            owner: owner.to_string(),
            first: page.map(|p| p.first),
            after: page.and_then(|p| p.after.clone()),
        });

        {
            let mut error = self.error.lock().await;
            if matches!(error.as_ref(), Some((at, _)) if *at <= call_index) {
                if let Some((_, e)) = error.take() {
                    return Err(e.into());
                }
            }
        }

        if self.failing_owners.lock().await.contains(owner) {
            return Err(ApiError::ServerError(format!("mock failure for '{}'", owner)).into());
        }

        Ok(())
    }
}

/// Serve the page addressed by `request` out of `pages`.
async fn serve<T: Clone>(pages: &PagesByOwner<T>, owner: &str, request: &PageRequest) -> Page<T> {
    let pages = pages.lock().await;
    let Some(pages) = pages.get(owner) else {
        return Page::empty();
    };

    let index = request
        .after
        .as_deref()
        .and_then(|cursor| cursor.strip_prefix('c'))
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(0);

    let items = pages.get(index).cloned().unwrap_or_default();
    if index + 1 < pages.len() {
        Page::with_next(items, format!("c{}", index + 1))
    } else {
        Page::last(items)
    }
}

// ============================================================================
// LookupApi Implementation
// ============================================================================

#[async_trait]
impl LookupApi for MockGitHubClient {
    async fn lookup_enterprise(&self, slug: &str) -> Result<Option<EntityNode>> {
        self.record("lookup_enterprise", slug, None).await?;
        Ok(self.enterprises.lock().await.get(slug).cloned())
    }

    async fn lookup_organization(&self, login: &str) -> Result<Option<EntityNode>> {
        self.record("lookup_organization", login, None).await?;
        Ok(self.organizations.lock().await.get(login).cloned())
    }
}

// ============================================================================
// ListingApi Implementation
// ============================================================================

#[async_trait]
impl ListingApi for MockGitHubClient {
    async fn enterprise_members(
        &self,
        enterprise: &str,
        page: &PageRequest,
    ) -> Result<Page<MemberAccount>> {
        self.record("enterprise_members", enterprise, Some(page))
            .await?;
        Ok(serve(&self.member_pages, enterprise, page).await)
    }

    async fn enterprise_saml_identities(
        &self,
        enterprise: &str,
        page: &PageRequest,
    ) -> Result<Page<ExternalIdentity>> {
        self.record("enterprise_saml_identities", enterprise, Some(page))
            .await?;
        Ok(serve(&self.enterprise_identity_pages, enterprise, page).await)
    }

    async fn enterprise_organizations(
        &self,
        enterprise: &str,
        page: &PageRequest,
    ) -> Result<Page<OrganizationNode>> {
        self.record("enterprise_organizations", enterprise, Some(page))
            .await?;
        Ok(serve(&self.enterprise_org_pages, enterprise, page).await)
    }

    async fn organization_saml_identities(
        &self,
        organization: &str,
        page: &PageRequest,
    ) -> Result<Page<ExternalIdentity>> {
        self.record("organization_saml_identities", organization, Some(page))
            .await?;
        Ok(serve(&self.organization_identity_pages, organization, page).await)
    }

    async fn organization_repositories(
        &self,
        organization: &str,
        page: &PageRequest,
    ) -> Result<Page<RepositoryNode>> {
        self.record("organization_repositories", organization, Some(page))
            .await?;
        Ok(serve(&self.repository_pages, organization, page).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> RepositoryNode {
        RepositoryNode {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockGitHubClient::new();

        assert!(mock.lookup_enterprise("acme").await.unwrap().is_none());

        let page = mock
            .organization_repositories("octo", &PageRequest::default())
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_next_page);
    }

    #[tokio::test]
    async fn test_mock_client_lookup() {
        let mock = MockGitHubClient::new()
            .with_organization("octo", "O_1", "Octo Inc")
            .await;

        let org = mock.lookup_organization("octo").await.unwrap().unwrap();
        assert_eq!(org.id, "O_1");
        assert_eq!(org.name.as_deref(), Some("Octo Inc"));
        assert!(mock.lookup_organization("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mock_client_pages_follow_cursors() {
        let mock = MockGitHubClient::new()
            .with_repository_pages("octo", vec![vec![repo("a"), repo("b")], vec![repo("c")]])
            .await;

        let first = mock
            .organization_repositories("octo", &PageRequest::first_page(2))
            .await
            .unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.end_cursor.as_deref(), Some("c1"));
        assert!(first.has_next_page);

        let second = mock
            .organization_repositories("octo", &PageRequest::first_page(2).next("c1".into()))
            .await
            .unwrap();
        assert_eq!(second.items, vec![repo("c")]);
        assert!(!second.has_next_page);
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockGitHubClient::new()
            .with_error(ApiError::Unauthorized)
            .await;

        let result = mock.lookup_enterprise("acme").await;
        assert!(result.is_err());

        // Error is consumed, next call succeeds
        let result = mock.lookup_enterprise("acme").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_error_at_call_index() {
        let mock = MockGitHubClient::new()
            .with_error_at(1, ApiError::ServerError("boom".into()))
            .await;

        assert!(mock.lookup_enterprise("acme").await.is_ok());
        assert!(mock.lookup_enterprise("acme").await.is_err());
        assert!(mock.lookup_enterprise("acme").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_failing_owner() {
        let mock = MockGitHubClient::new()
            .with_organization("ok", "O_1", "Ok")
            .await
            .with_failing_owner("bad")
            .await;

        assert!(mock.lookup_organization("ok").await.is_ok());
        assert!(mock.lookup_organization("bad").await.is_err());
        assert!(mock.lookup_organization("bad").await.is_err());
    }

    #[tokio::test]
    async fn test_mock_client_call_counts_and_captures() {
        let mock = MockGitHubClient::new();

        mock.lookup_enterprise("acme").await.unwrap();
        mock.enterprise_members("acme", &PageRequest::first_page(25))
            .await
            .unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.lookup_enterprise, 1);
        assert_eq!(counts.enterprise_members, 1);
        assert_eq!(counts.total(), 2);

        let captured = mock.captured_requests().await;
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].method, "lookup_enterprise");
        assert!(captured[0].first.is_none());
        assert_eq!(captured[1].owner, "acme");
        assert_eq!(captured[1].first, Some(25));
        assert!(captured[1].after.is_none());
    }
}
