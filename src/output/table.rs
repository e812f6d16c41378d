//! Rounded table output

use tabled::settings::{Alignment, Modify, Style, object::Rows};
use tabled::{Table, Tabled};

/// Render `items` through their display row type `D` as a rounded table.
///
/// The header row is centered. An empty input renders the header alone.
pub fn format_table<R, D>(items: &[R]) -> String
where
    D: Tabled + for<'a> From<&'a R>,
{
    let mut table = Table::new(items.iter().map(D::from));
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
