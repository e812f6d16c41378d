//! Enterprise, organization, user and repository entities
//!
//! Collections are keyed by login (or repository name) in `BTreeMap`s so that
//! output comes out sorted and deterministic regardless of page order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::client::models::{EntityNode, ExternalIdentity, MemberAccount};

/// A GitHub Enterprise account validated against the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Enterprise {
    /// Enterprise slug as supplied by the user
    pub login: String,
    /// Display name
    pub name: String,
    /// Opaque node ID
    pub id: String,
    /// Organizations keyed by login
    pub organizations: BTreeMap<String, Organization>,
    /// Members keyed by login
    pub users: BTreeMap<String, User>,
}

/// A GitHub organization validated against the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Organization {
    /// Organization login
    pub login: String,
    /// Display name
    pub name: String,
    /// Opaque node ID (empty for organizations discovered through an enterprise)
    pub id: String,
    /// Repositories keyed by name
    pub repositories: BTreeMap<String, Repository>,
    /// Users keyed by login
    pub users: BTreeMap<String, User>,
}

/// A GitHub user with whatever SSO details are known
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub saml_name_id: Option<String>,
}

/// A repository owned by an organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub name: String,
}

impl Enterprise {
    /// Build from a lookup result, falling back to the slug for the name.
    pub fn from_lookup(login: &str, node: EntityNode) -> Self {
        Self {
            login: login.to_string(),
            name: node.name.filter(|n| !n.is_empty()).unwrap_or_else(|| login.to_string()),
            id: node.id,
            ..Default::default()
        }
    }
}

impl Organization {
    /// Build from a lookup result, falling back to the login for the name.
    pub fn from_lookup(login: &str, node: EntityNode) -> Self {
        Self {
            login: login.to_string(),
            name: node.name.filter(|n| !n.is_empty()).unwrap_or_else(|| login.to_string()),
            id: node.id,
            ..Default::default()
        }
    }
}

/// `Some(value)` unless the value is missing or empty.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(String::from)
}

impl User {
    /// Fold an enterprise membership record into an existing user.
    ///
    /// Memberships are authoritative for the profile name; the SAML NameID is
    /// left untouched. Empty incoming values never overwrite known ones.
    pub fn merge_member(existing: Option<User>, member: MemberAccount) -> User {
        let mut user = existing.unwrap_or_default();
        if let Some(login) = non_empty(member.login.as_deref()) {
            user.login = login;
        }
        if let Some(name) = non_empty(member.name.as_deref()) {
            user.name = Some(name);
        }
        user
    }

    /// Fold a SAML external identity into an existing user.
    ///
    /// Identities are authoritative for the NameID. The linked account's
    /// name only fills a name that is still unknown.
    pub fn merge_identity(existing: Option<User>, identity: ExternalIdentity) -> User {
        let mut user = existing.unwrap_or_default();
        if let Some(login) = non_empty(identity.login()) {
            user.login = login;
        }
        if let Some(name_id) = non_empty(identity.name_id()) {
            user.saml_name_id = Some(name_id);
        }
        if user.name.is_none() {
            user.name = non_empty(identity.user.as_ref().and_then(|u| u.name.as_deref()));
        }
        user
    }
}
