//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod fetch;
mod global;
mod targets;

pub use common::OutputFormat;
pub use fetch::FetchArgs;
pub use global::GlobalOptions;
pub use targets::{TargetArgs, merge_names};
