//! GraphQL query documents for the GitHub v4 API
//!
//! Each query is a zero-sized type implementing [`LookupQuery`] or
//! [`PagedQuery`]. The trait carries the document, the name of the variable
//! identifying the owner (enterprise slug or organization login), and how to
//! dig the interesting part out of the response data. The client executes any
//! of them through one generic path.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::models::{EntityNode, ExternalIdentity, MemberAccount, OrganizationNode, RepositoryNode};
use super::pagination::{Connection, PageRequest};

/// Single-request query resolving an enterprise or organization by name.
pub trait LookupQuery {
    /// Operation name, used in logs and for matching in tests
    const OPERATION: &'static str;
    /// Query document
    const DOCUMENT: &'static str;
    /// Variable holding the owner name
    const OWNER_VARIABLE: &'static str;

    /// Shape of the `data` field
    type Data: DeserializeOwned;

    /// Extract the looked-up entity; `None` when GitHub returned null.
    fn entity(data: Self::Data) -> Option<EntityNode>;

    /// Variables for looking up `owner`.
    fn variables(owner: &str) -> Value {
        let mut vars = Map::new();
        vars.insert(Self::OWNER_VARIABLE.to_string(), Value::from(owner));
        Value::Object(vars)
    }
}

/// Paginated query over a connection owned by an enterprise or organization.
pub trait PagedQuery {
    /// Operation name, used in logs and for matching in tests
    const OPERATION: &'static str;
    /// Query document; must declare `$first: Int!` and `$cursor: String`
    const DOCUMENT: &'static str;
    /// Variable holding the owner name
    const OWNER_VARIABLE: &'static str;

    /// Shape of the `data` field
    type Data: DeserializeOwned;
    /// Node type carried by the connection's edges
    type Node;

    /// Extract the connection; `None` when an intermediate object is null
    /// (unknown owner, or no SAML identity provider configured).
    fn connection(data: Self::Data) -> Option<Connection<Self::Node>>;

    /// Variables for fetching `page` of `owner`'s connection.
    fn variables(owner: &str, page: &PageRequest) -> Value {
        let mut vars = Map::new();
        vars.insert(Self::OWNER_VARIABLE.to_string(), Value::from(owner));
        vars.insert("first".to_string(), Value::from(page.first));
        vars.insert(
            "cursor".to_string(),
            page.after.clone().map(Value::from).unwrap_or(Value::Null),
        );
        Value::Object(vars)
    }
}

// ============================================================================
// Shared response fragments
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProvider {
    pub external_identities: Connection<ExternalIdentity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithIdentityProvider {
    #[serde(default)]
    pub saml_identity_provider: Option<IdentityProvider>,
}

// ============================================================================
// Enterprise queries
// ============================================================================

/// Validate an enterprise account by slug.
pub struct EnterpriseLookup;

#[derive(Debug, Deserialize)]
pub struct EnterpriseLookupData {
    #[serde(default)]
    pub enterprise: Option<EntityNode>,
}

impl LookupQuery for EnterpriseLookup {
    const OPERATION: &'static str = "EnterpriseLookup";
    const DOCUMENT: &'static str = r#"query EnterpriseLookup($enterpriseName: String!) {
  enterprise(slug: $enterpriseName) {
    id
    name
  }
}"#;
    const OWNER_VARIABLE: &'static str = "enterpriseName";

    type Data = EnterpriseLookupData;

    fn entity(data: Self::Data) -> Option<EntityNode> {
        data.enterprise
    }
}

/// Enterprise members with their profile names.
pub struct EnterpriseMembers;

#[derive(Debug, Deserialize)]
pub struct EnterpriseMembersData {
    #[serde(default)]
    pub enterprise: Option<EnterpriseMembersField>,
}

#[derive(Debug, Deserialize)]
pub struct EnterpriseMembersField {
    pub members: Connection<MemberAccount>,
}

impl PagedQuery for EnterpriseMembers {
    const OPERATION: &'static str = "EnterpriseMembers";
    const DOCUMENT: &'static str = r#"query EnterpriseMembers($enterpriseName: String!, $first: Int!, $cursor: String) {
  enterprise(slug: $enterpriseName) {
    members(first: $first, after: $cursor) {
      edges {
        node {
          ... on EnterpriseUserAccount {
            login
            name
          }
          ... on User {
            login
            name
          }
        }
      }
      pageInfo {
        endCursor
        hasNextPage
      }
    }
  }
}"#;
    const OWNER_VARIABLE: &'static str = "enterpriseName";

    type Data = EnterpriseMembersData;
    type Node = MemberAccount;

    fn connection(data: Self::Data) -> Option<Connection<Self::Node>> {
        data.enterprise.map(|e| e.members)
    }
}

/// SAML identities of an enterprise's identity provider.
pub struct EnterpriseSamlIdentities;

#[derive(Debug, Deserialize)]
pub struct EnterpriseSamlIdentitiesData {
    #[serde(default)]
    pub enterprise: Option<EnterpriseOwnerInfoField>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseOwnerInfoField {
    #[serde(default)]
    pub owner_info: Option<WithIdentityProvider>,
}

impl PagedQuery for EnterpriseSamlIdentities {
    const OPERATION: &'static str = "EnterpriseSamlIdentities";
    const DOCUMENT: &'static str = r#"query EnterpriseSamlIdentities($enterpriseName: String!, $first: Int!, $cursor: String) {
  enterprise(slug: $enterpriseName) {
    ownerInfo {
      samlIdentityProvider {
        externalIdentities(first: $first, after: $cursor) {
          edges {
            node {
              guid
              samlIdentity {
                nameId
              }
              user {
                login
                name
              }
            }
          }
          pageInfo {
            endCursor
            hasNextPage
          }
        }
      }
    }
  }
}"#;
    const OWNER_VARIABLE: &'static str = "enterpriseName";

    type Data = EnterpriseSamlIdentitiesData;
    type Node = ExternalIdentity;

    fn connection(data: Self::Data) -> Option<Connection<Self::Node>> {
        data.enterprise
            .and_then(|e| e.owner_info)
            .and_then(|o| o.saml_identity_provider)
            .map(|p| p.external_identities)
    }
}

/// Organizations belonging to an enterprise.
pub struct EnterpriseOrganizations;

#[derive(Debug, Deserialize)]
pub struct EnterpriseOrganizationsData {
    #[serde(default)]
    pub enterprise: Option<EnterpriseOrganizationsField>,
}

#[derive(Debug, Deserialize)]
pub struct EnterpriseOrganizationsField {
    pub organizations: Connection<OrganizationNode>,
}

impl PagedQuery for EnterpriseOrganizations {
    const OPERATION: &'static str = "EnterpriseOrganizations";
    const DOCUMENT: &'static str = r#"query EnterpriseOrganizations($enterpriseName: String!, $first: Int!, $cursor: String) {
  enterprise(slug: $enterpriseName) {
    organizations(first: $first, after: $cursor) {
      edges {
        node {
          login
          name
        }
      }
      pageInfo {
        endCursor
        hasNextPage
      }
    }
  }
}"#;
    const OWNER_VARIABLE: &'static str = "enterpriseName";

    type Data = EnterpriseOrganizationsData;
    type Node = OrganizationNode;

    fn connection(data: Self::Data) -> Option<Connection<Self::Node>> {
        data.enterprise.map(|e| e.organizations)
    }
}

// ============================================================================
// Organization queries
// ============================================================================

/// Validate an organization by login.
pub struct OrganizationLookup;

#[derive(Debug, Deserialize)]
pub struct OrganizationLookupData {
    #[serde(default)]
    pub organization: Option<EntityNode>,
}

impl LookupQuery for OrganizationLookup {
    const OPERATION: &'static str = "OrganizationLookup";
    const DOCUMENT: &'static str = r#"query OrganizationLookup($organizationName: String!) {
  organization(login: $organizationName) {
    id
    name
  }
}"#;
    const OWNER_VARIABLE: &'static str = "organizationName";

    type Data = OrganizationLookupData;

    fn entity(data: Self::Data) -> Option<EntityNode> {
        data.organization
    }
}

/// SAML identities of an organization's identity provider.
pub struct OrganizationSamlIdentities;

#[derive(Debug, Deserialize)]
pub struct OrganizationSamlIdentitiesData {
    #[serde(default)]
    pub organization: Option<WithIdentityProvider>,
}

impl PagedQuery for OrganizationSamlIdentities {
    const OPERATION: &'static str = "OrganizationSamlIdentities";
    const DOCUMENT: &'static str = r#"query OrganizationSamlIdentities($organizationName: String!, $first: Int!, $cursor: String) {
  organization(login: $organizationName) {
    samlIdentityProvider {
      externalIdentities(first: $first, after: $cursor) {
        edges {
          node {
            guid
            samlIdentity {
              nameId
              username
            }
            user {
              login
              name
            }
          }
        }
        pageInfo {
          endCursor
          hasNextPage
        }
      }
    }
  }
}"#;
    const OWNER_VARIABLE: &'static str = "organizationName";

    type Data = OrganizationSamlIdentitiesData;
    type Node = ExternalIdentity;

    fn connection(data: Self::Data) -> Option<Connection<Self::Node>> {
        data.organization
            .and_then(|o| o.saml_identity_provider)
            .map(|p| p.external_identities)
    }
}

/// Repositories owned by an organization.
pub struct OrganizationRepositories;

#[derive(Debug, Deserialize)]
pub struct OrganizationRepositoriesData {
    #[serde(default)]
    pub organization: Option<OrganizationRepositoriesField>,
}

#[derive(Debug, Deserialize)]
pub struct OrganizationRepositoriesField {
    pub repositories: Connection<RepositoryNode>,
}

impl PagedQuery for OrganizationRepositories {
    const OPERATION: &'static str = "OrganizationRepositories";
    const DOCUMENT: &'static str = r#"query OrganizationRepositories($organizationName: String!, $first: Int!, $cursor: String) {
  organization(login: $organizationName) {
    repositories(first: $first, after: $cursor) {
      edges {
        node {
          name
        }
      }
      pageInfo {
        endCursor
        hasNextPage
      }
    }
  }
}"#;
    const OWNER_VARIABLE: &'static str = "organizationName";

    type Data = OrganizationRepositoriesData;
    type Node = RepositoryNode;

    fn connection(data: Self::Data) -> Option<Connection<Self::Node>> {
        data.organization.map(|o| o.repositories)
    }
}
