//! Shared command handler patterns

pub mod batch;

pub use batch::{ReportPrinter, run_targets};
