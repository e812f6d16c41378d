//! GitHub GraphQL API client implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::api::{ListingApi, LookupApi};
use super::models::{EntityNode, ExternalIdentity, MemberAccount, OrganizationNode, RepositoryNode};
use super::pagination::{Page, PageRequest};
use super::queries::{
    EnterpriseLookup, EnterpriseMembers, EnterpriseOrganizations, EnterpriseSamlIdentities,
    LookupQuery, OrganizationLookup, OrganizationRepositories, OrganizationSamlIdentities,
    PagedQuery,
};
use crate::error::{ApiError, Error, Result};

/// GitHub GraphQL endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com/graphql";

/// Upper bound on any single wait between retries
const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// Wait used for rate limits that don't say when they reset
const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

/// How transient failures are retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry; doubled on each subsequent one
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// Policy with the default backoff and `max_retries` retries.
    pub fn with_retries(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    /// Delay before retry number `attempt` (zero-based).
    ///
    /// A server-provided `retry_after` replaces the exponential backoff.
    /// Either way the wait never exceeds 30 seconds.
    pub fn delay_for(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        let backoff = self
            .base_delay
            .saturating_mul(2u32.saturating_pow(attempt));
        retry_after.unwrap_or(backoff).min(MAX_RETRY_DELAY)
    }
}

/// GitHub GraphQL API client
pub struct GitHubClient {
    http: HttpClient,
    api_url: String,
    token: String,
    retry: RetryPolicy,
}

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
struct GraphQlResponse<D> {
    data: Option<D>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

/// Decoded data plus any errors GitHub reported alongside it
#[derive(Debug)]
struct Reply<D> {
    data: D,
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

impl GitHubClient {
    /// Create a client for `api_url` authenticating with `token`.
    pub fn new(token: impl Into<String>, api_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            api_url: api_url.into(),
            token: token.into(),
            retry: RetryPolicy::default(),
        })
    }

    /// Replace the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Endpoint this client talks to
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Execute a query, retrying transient failures.
    async fn execute<D: DeserializeOwned>(
        &self,
        operation: &str,
        document: &str,
        variables: Value,
    ) -> Result<Reply<D>> {
        let body = json!({
            "operationName": operation,
            "query": document,
            "variables": variables,
        });

        let mut attempt = 0;
        loop {
            match self.send_once(operation, &body).await {
                Ok(data) => return Ok(data),
                Err(err) if err.is_transient() && attempt < self.retry.max_retries => {
                    let retry_after = match &err {
                        Error::Api(ApiError::RateLimit(wait)) => Some(*wait),
                        _ => None,
                    };
                    let delay = self.retry.delay_for(attempt, retry_after);
                    attempt += 1;
                    warn!(
                        "{} failed: {}; retrying in {:?} ({}/{})",
                        operation, err, delay, attempt, self.retry.max_retries
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Send one request and decode the GraphQL envelope.
    async fn send_once<D: DeserializeOwned>(
        &self,
        operation: &str,
        body: &Value,
    ) -> Result<Reply<D>> {
        debug!("POST {} ({})", self.api_url, operation);

        let response = self
            .http
            .post(&self.api_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(USER_AGENT, concat!("gh-sso/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let text = response.text().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to read response: {}", e))
                })?;
                let envelope: GraphQlResponse<D> = serde_json::from_str(&text).map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse {} response: {}", operation, e))
                })?;
                unwrap_envelope(operation, envelope)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => match rate_limit_wait(response.headers()) {
                Some(wait) => Err(ApiError::RateLimit(wait).into()),
                None => Err(ApiError::Forbidden.into()),
            },
            StatusCode::TOO_MANY_REQUESTS => {
                let wait = rate_limit_wait(response.headers()).unwrap_or(DEFAULT_RATE_LIMIT_WAIT);
                Err(ApiError::RateLimit(wait).into())
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(self.api_url.clone()).into()),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .ok()
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| status.to_string());
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => Err(ApiError::InvalidResponse(format!("Unexpected status code: {}", status)).into()),
        }
    }

    async fn lookup<Q: LookupQuery>(&self, owner: &str) -> Result<Option<EntityNode>> {
        let reply: Reply<Q::Data> = self
            .execute(Q::OPERATION, Q::DOCUMENT, Q::variables(owner))
            .await?;

        match Q::entity(reply.data) {
            Some(node) => Ok(Some(node)),
            None => match unresolved_error(&reply.errors) {
                Some(err) => Err(err),
                None => Ok(None),
            },
        }
    }

    async fn fetch_page<Q: PagedQuery>(
        &self,
        owner: &str,
        page: &PageRequest,
    ) -> Result<Page<Q::Node>> {
        let reply: Reply<Q::Data> = self
            .execute(Q::OPERATION, Q::DOCUMENT, Q::variables(owner, page))
            .await?;

        match Q::connection(reply.data) {
            Some(connection) => Ok(Page::from(connection)),
            None => {
                if let Some(err) = unresolved_error(&reply.errors) {
                    return Err(err);
                }
                warn!(
                    "{} returned no connection for '{}'; treating as empty",
                    Q::OPERATION,
                    owner
                );
                Ok(Page::empty())
            }
        }
    }
}

fn is_not_found(error: &GraphQlError) -> bool {
    error.kind.as_deref() == Some("NOT_FOUND")
}

/// Turn a GraphQL envelope into its data, keeping errors reported next to it.
fn unwrap_envelope<D>(operation: &str, envelope: GraphQlResponse<D>) -> Result<Reply<D>> {
    let errors = envelope.errors.unwrap_or_default();

    match envelope.data {
        Some(data) => {
            for error in &errors {
                if is_not_found(error) {
                    debug!("{}: {}", operation, error.message);
                } else {
                    warn!("{}: {}", operation, error.message);
                }
            }
            Ok(Reply { data, errors })
        }
        None if errors.iter().any(|e| e.kind.as_deref() == Some("RATE_LIMITED")) => {
            Err(ApiError::RateLimit(DEFAULT_RATE_LIMIT_WAIT).into())
        }
        None if errors.is_empty() => {
            Err(ApiError::InvalidResponse(format!("{} returned no data", operation)).into())
        }
        None => {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            Err(ApiError::GraphQl(messages.join("; ")).into())
        }
    }
}

/// The error explaining a null result, if any.
///
/// `NOT_FOUND` entries only mean the object doesn't exist and are left to the
/// caller. Anything else (typically `FORBIDDEN` for a token missing a scope)
/// means the null hides data the token couldn't read.
fn unresolved_error(errors: &[GraphQlError]) -> Option<Error> {
    let blocking: Vec<&GraphQlError> = errors.iter().filter(|e| !is_not_found(e)).collect();
    if blocking.is_empty() {
        return None;
    }

    if blocking.iter().any(|e| e.kind.as_deref() == Some("FORBIDDEN")) {
        return Some(ApiError::Forbidden.into());
    }
    let messages: Vec<&str> = blocking.iter().map(|e| e.message.as_str()).collect();
    Some(ApiError::GraphQl(messages.join("; ")).into())
}

/// How long GitHub asks us to wait, if the response is a rate limit.
///
/// `retry-after` is used for secondary limits; an exhausted primary limit
/// reports `x-ratelimit-remaining: 0` and an epoch `x-ratelimit-reset`.
fn rate_limit_wait(headers: &HeaderMap) -> Option<Duration> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    if let Some(secs) = header("retry-after").and_then(|v| v.parse::<u64>().ok()) {
        return Some(Duration::from_secs(secs));
    }

    if header("x-ratelimit-remaining") == Some("0") {
        let wait = header("x-ratelimit-reset")
            .and_then(|v| v.parse::<i64>().ok())
            .map(|reset| (reset - Utc::now().timestamp()).max(0) as u64)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_RATE_LIMIT_WAIT);
        return Some(wait);
    }

    None
}

#[async_trait]
impl LookupApi for GitHubClient {
    async fn lookup_enterprise(&self, slug: &str) -> Result<Option<EntityNode>> {
        self.lookup::<EnterpriseLookup>(slug).await
    }

    async fn lookup_organization(&self, login: &str) -> Result<Option<EntityNode>> {
        self.lookup::<OrganizationLookup>(login).await
    }
}

#[async_trait]
impl ListingApi for GitHubClient {
    async fn enterprise_members(
        &self,
        enterprise: &str,
        page: &PageRequest,
    ) -> Result<Page<MemberAccount>> {
        self.fetch_page::<EnterpriseMembers>(enterprise, page).await
    }

    async fn enterprise_saml_identities(
        &self,
        enterprise: &str,
        page: &PageRequest,
    ) -> Result<Page<ExternalIdentity>> {
        self.fetch_page::<EnterpriseSamlIdentities>(enterprise, page)
            .await
    }

    async fn enterprise_organizations(
        &self,
        enterprise: &str,
        page: &PageRequest,
    ) -> Result<Page<OrganizationNode>> {
        self.fetch_page::<EnterpriseOrganizations>(enterprise, page)
            .await
    }

    async fn organization_saml_identities(
        &self,
        organization: &str,
        page: &PageRequest,
    ) -> Result<Page<ExternalIdentity>> {
        self.fetch_page::<OrganizationSamlIdentities>(organization, page)
            .await
    }

    async fn organization_repositories(
        &self,
        organization: &str,
        page: &PageRequest,
    ) -> Result<Page<RepositoryNode>> {
        self.fetch_page::<OrganizationRepositories>(organization, page)
            .await
    }
}
