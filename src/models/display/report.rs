//! Per-target report wrapping the rows produced for one enterprise or organization

use serde::Serialize;

use crate::sso::{Enterprise, Organization};

/// Which kind of entity a report describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Enterprise,
    Organization,
}

/// Rows collected for one validated target.
#[derive(Debug, Clone, Serialize)]
pub struct EntityReport<R> {
    pub kind: EntityKind,
    pub login: String,
    pub name: String,
    pub id: String,
    pub items: Vec<R>,
}

impl<R> EntityReport<R> {
    /// Report for a validated enterprise.
    pub fn for_enterprise(enterprise: &Enterprise, items: Vec<R>) -> Self {
        Self {
            kind: EntityKind::Enterprise,
            login: enterprise.login.clone(),
            name: enterprise.name.clone(),
            id: enterprise.id.clone(),
            items,
        }
    }

    /// Report for a validated organization.
    pub fn for_organization(organization: &Organization, items: Vec<R>) -> Self {
        Self {
            kind: EntityKind::Organization,
            login: organization.login.clone(),
            name: organization.name.clone(),
            id: organization.id.clone(),
            items,
        }
    }

    /// `Enterprise: <name> (<login>; <id>)`
    pub fn confirmation(&self) -> String {
        let label = match self.kind {
            EntityKind::Enterprise => "Enterprise",
            EntityKind::Organization => "Organization",
        };
        format!("{}: {} ({}; {})", label, self.name, self.login, self.id)
    }
}
