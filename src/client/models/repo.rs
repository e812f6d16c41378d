//! Repository models

use serde::{Deserialize, Serialize};

/// Repository owned by an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryNode {
    /// Repository name
    pub name: String,
}
