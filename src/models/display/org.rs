//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use crate::output::plain::PlainRow;
use crate::sso::Organization;

/// Organization display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    /// Organization login
    #[tabled(rename = "LOGIN")]
    pub login: String,

    /// Organization name
    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<&Organization> for OrgDisplay {
    fn from(org: &Organization) -> Self {
        Self {
            login: org.login.clone(),
            name: org.name.clone(),
        }
    }
}

impl From<&OrgDisplay> for OrgDisplay {
    fn from(row: &OrgDisplay) -> Self {
        row.clone()
    }
}

impl PlainRow for OrgDisplay {
    const HEADERS: [&'static str; 2] = ["Login", "Name"];

    fn cells(&self) -> [String; 2] {
        [self.login.clone(), self.name.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_display_from_ref() {
        let org = Organization {
            login: "widgets".to_string(),
            name: "Widgets Inc".to_string(),
            ..Default::default()
        };

        let display = OrgDisplay::from(&org);

        assert_eq!(display.login, "widgets");
        assert_eq!(display.name, "Widgets Inc");
        assert_eq!(display.cells(), ["widgets".to_string(), "Widgets Inc".to_string()]);
    }
}
