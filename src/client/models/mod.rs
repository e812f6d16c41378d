//! GitHub GraphQL response models
//!
//! Node types as they appear inside connection edges and lookup results.
//! Field names follow the GraphQL schema (camelCase on the wire).

mod account;
pub mod identity;
mod repo;

pub use account::{EntityNode, MemberAccount, OrganizationNode};
pub use identity::ExternalIdentity;
pub use repo::RepositoryNode;
