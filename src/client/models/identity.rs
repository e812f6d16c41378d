//! SAML external identity models

use serde::{Deserialize, Serialize};

/// External identity provisioned through a SAML identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalIdentity {
    /// Identity GUID
    #[serde(default)]
    pub guid: String,

    /// SAML attributes asserted by the identity provider
    #[serde(default)]
    pub saml_identity: Option<SamlIdentity>,

    /// GitHub user linked to the identity (absent until the user signs in)
    #[serde(default)]
    pub user: Option<IdentityUser>,
}

/// SAML attributes of an external identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlIdentity {
    /// SAML NameID
    #[serde(default)]
    pub name_id: Option<String>,

    /// Username asserted by the provider
    #[serde(default)]
    pub username: Option<String>,
}

/// GitHub account linked to an external identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl ExternalIdentity {
    /// Login of the linked GitHub account, if any.
    pub fn login(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.login.as_str())
    }

    /// SAML NameID, if asserted.
    pub fn name_id(&self) -> Option<&str> {
        self.saml_identity.as_ref().and_then(|s| s.name_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_linked_identity() {
        let json = r#"{
            "guid": "0b3c",
            "samlIdentity": {"nameId": "bob@example.com", "username": "bob"},
            "user": {"login": "bob", "name": "Bob B"}
        }"#;
        let identity: ExternalIdentity = serde_json::from_str(json).unwrap();

        assert_eq!(identity.login(), Some("bob"));
        assert_eq!(identity.name_id(), Some("bob@example.com"));
    }

    #[test]
    fn test_deserialize_unlinked_identity() {
        let json = r#"{"guid": "9f1a", "samlIdentity": {"nameId": "ghost@example.com"}, "user": null}"#;
        let identity: ExternalIdentity = serde_json::from_str(json).unwrap();

        assert_eq!(identity.login(), None);
        assert_eq!(identity.name_id(), Some("ghost@example.com"));
    }
}
