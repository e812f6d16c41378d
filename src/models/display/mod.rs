//! Display model implementations for table and plain output
//!
//! Display models transform SSO entities into CLI-friendly rows with
//! appropriate column names.

mod org;
mod repo;
pub mod report;
mod user;

pub use org::OrgDisplay;
pub use repo::RepoDisplay;
pub use report::EntityReport;
pub use user::UserDisplay;
