//! API trait definitions split by responsibility
//!
//! - [`LookupApi`] - Resolve an enterprise or organization by name
//! - [`ListingApi`] - Page through members, identities, organizations and repositories
//!
//! The [`GitHubApi`](super::GitHubApi) super-trait combines both.

mod listing;
mod lookup;

pub use listing::ListingApi;
pub use lookup::LookupApi;
