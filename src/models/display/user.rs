//! SSO user display model

use tabled::Tabled;

use crate::output::plain::PlainRow;
use crate::sso::User;

/// User display model for table output.
#[derive(Debug, Clone, Tabled)]
pub struct UserDisplay {
    /// GitHub login
    #[tabled(rename = "LOGIN")]
    pub login: String,

    /// Profile name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// SAML NameID asserted by the identity provider
    #[tabled(rename = "SAML NAMEID")]
    pub saml_name_id: String,
}

impl From<&User> for UserDisplay {
    fn from(user: &User) -> Self {
        Self {
            login: user.login.clone(),
            name: user.name.clone().unwrap_or_else(|| "--".to_string()),
            saml_name_id: user.saml_name_id.clone().unwrap_or_else(|| "--".to_string()),
        }
    }
}

impl PlainRow for User {
    const HEADERS: [&'static str; 2] = ["Login", "SAML NameID"];

    fn cells(&self) -> [String; 2] {
        [
            self.login.clone(),
            self.saml_name_id.clone().unwrap_or_default(),
        ]
    }
}
