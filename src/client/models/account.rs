//! Enterprise, organization and member account models

use serde::{Deserialize, Serialize};

/// Result of an enterprise or organization lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityNode {
    /// Opaque node ID (empty when the entity does not resolve)
    #[serde(default)]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,
}

/// Enterprise member: either an `EnterpriseUserAccount` or a `User`.
///
/// Both variants are queried through inline fragments that select the same
/// fields, so a single shape covers them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberAccount {
    /// Login (absent for fragments that did not match)
    #[serde(default)]
    pub login: Option<String>,

    /// Profile name
    #[serde(default)]
    pub name: Option<String>,
}

/// Organization belonging to an enterprise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationNode {
    /// Organization login
    pub login: String,

    /// Organization display name
    #[serde(default)]
    pub name: Option<String>,
}
