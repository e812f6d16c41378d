//! Repository display model

use serde::Serialize;
use tabled::Tabled;

use crate::output::plain::PlainRow;
use crate::sso::Organization;

/// Repository row, qualified by its owning organization.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RepoDisplay {
    /// Owning organization login
    #[tabled(rename = "ORGANIZATION")]
    pub organization: String,

    /// Repository name
    #[tabled(rename = "REPOSITORY")]
    pub name: String,
}

impl RepoDisplay {
    /// One row per repository of `org`, sorted by name.
    pub fn rows_for(org: &Organization) -> Vec<RepoDisplay> {
        org.repositories
            .values()
            .map(|repo| RepoDisplay {
                organization: org.login.clone(),
                name: repo.name.clone(),
            })
            .collect()
    }
}

impl From<&RepoDisplay> for RepoDisplay {
    fn from(row: &RepoDisplay) -> Self {
        row.clone()
    }
}

impl PlainRow for RepoDisplay {
    const HEADERS: [&'static str; 2] = ["Organization", "Repository"];

    fn cells(&self) -> [String; 2] {
        [self.organization.clone(), self.name.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sso::entity::Repository;

    #[test]
    fn test_rows_for_organization() {
        let mut org = Organization {
            login: "octo".to_string(),
            ..Default::default()
        };
        for name in ["web", "api"] {
            org.repositories.insert(
                name.to_string(),
                Repository {
                    name: name.to_string(),
                },
            );
        }

        let rows = RepoDisplay::rows_for(&org);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "api");
        assert_eq!(rows[1].organization, "octo");
    }
}
