//! Output formatting for CLI results
//!
//! Plain and table output are printed per target as soon as it finishes.
//! JSON output wraps every report in a single document, so callers collect
//! reports and format them once at the end.

use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::models::EntityReport;

pub mod json;
pub mod plain;
pub mod table;

use plain::PlainRow;

/// Format one report for a text format.
///
/// `D` is the table display model built from each row. Returns `None` for
/// [`OutputFormat::Json`].
pub fn format_report<R, D>(report: &EntityReport<R>, format: OutputFormat) -> Option<String>
where
    R: PlainRow,
    D: Tabled + for<'a> From<&'a R>,
{
    let body = match format {
        OutputFormat::Plain => plain::format_plain(&report.items),
        OutputFormat::Table => table::format_table::<R, D>(&report.items),
        OutputFormat::Json => return None,
    };
    Some(format!("{}\n\n{}", report.confirmation(), body))
}
