//! Display models for CLI output
//!
//! This module provides shared display model abstractions for converting
//! SSO entities into CLI-friendly display formats.

pub mod display;

pub use display::{EntityReport, OrgDisplay, RepoDisplay, UserDisplay};
