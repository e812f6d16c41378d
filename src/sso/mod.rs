//! SSO domain: entities, validation, and connection fetching
//!
//! A command validates each target first ([`validate`]), then populates the
//! returned entity through one or more fetches ([`fetch`]). Fetched records
//! are merged into the entity's maps by login via [`aggregate`].

pub mod aggregate;
pub mod entity;
pub mod fetch;
pub mod validate;

use std::fmt;

pub use entity::{Enterprise, Organization, User};
pub use fetch::{
    fetch_enterprise_members, fetch_enterprise_organizations, fetch_enterprise_repositories,
    fetch_enterprise_saml_identities, fetch_organization_repositories,
    fetch_organization_saml_identities,
};
pub use validate::{validate_enterprise, validate_organization};

/// An enterprise or organization named on the command line or in config
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Enterprise(String),
    Organization(String),
}

impl Target {
    /// Slug or login of the target
    pub fn name(&self) -> &str {
        match self {
            Target::Enterprise(name) | Target::Organization(name) => name,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Enterprise(name) => write!(f, "enterprise '{}'", name),
            Target::Organization(name) => write!(f, "organization '{}'", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display() {
        assert_eq!(
            Target::Enterprise("acme".into()).to_string(),
            "enterprise 'acme'"
        );
        assert_eq!(
            Target::Organization("octo".into()).to_string(),
            "organization 'octo'"
        );
        assert_eq!(Target::Organization("octo".into()).name(), "octo");
    }
}
