//! GitHub GraphQL API client
//!
//! The API surface is split into [`LookupApi`] and [`ListingApi`]; code that
//! needs both takes a [`GitHubApi`], implemented by the real
//! [`GitHubClient`] and by the mock used in tests.

pub mod api;
pub mod github;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod queries;

pub use api::{ListingApi, LookupApi};
pub use github::{DEFAULT_API_URL, GitHubClient, RetryPolicy};
#[cfg(test)]
pub use mock::MockGitHubClient;
pub use pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, paginate};

/// Full GitHub API surface used by the commands
pub trait GitHubApi: LookupApi + ListingApi {}

impl<T: LookupApi + ListingApi + ?Sized> GitHubApi for T {}
