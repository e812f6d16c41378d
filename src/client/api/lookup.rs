//! Lookup API trait

use async_trait::async_trait;

use crate::client::models::EntityNode;
use crate::error::Result;

/// Single-entity lookups used to validate user-supplied names
#[async_trait]
pub trait LookupApi: Send + Sync {
    /// Resolve an enterprise by slug. `Ok(None)` when GitHub returns null.
    async fn lookup_enterprise(&self, slug: &str) -> Result<Option<EntityNode>>;

    /// Resolve an organization by login. `Ok(None)` when GitHub returns null.
    async fn lookup_organization(&self, login: &str) -> Result<Option<EntityNode>>;
}
