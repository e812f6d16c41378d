//! Flags controlling how targets are fetched

use clap::Args;

use crate::client::MAX_PAGE_SIZE;

/// Page size, concurrency and failure handling for multi-target commands
#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    /// Items per request (1-100; default from config, else 100)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=MAX_PAGE_SIZE as i64))]
    pub page_size: Option<u16>,

    /// Targets processed at once; output stays in input order
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Stop at the first failing target
    #[arg(long)]
    pub fail_fast: bool,
}

impl Default for FetchArgs {
    fn default() -> Self {
        Self {
            page_size: None,
            concurrency: 1,
            fail_fast: false,
        }
    }
}
