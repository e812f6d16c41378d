//! Fixed-width two-column output
//!
//! Columns are left-aligned and padded to 32 and 48 characters (the classic
//! `%-32s %-48s` layout), under a header row and a dashed underline. Padding
//! is kept on every line, including trailing spaces.

/// Width of the first column
pub const FIRST_COLUMN_WIDTH: usize = 32;
/// Width of the second column
pub const SECOND_COLUMN_WIDTH: usize = 48;

/// A row that can be rendered in the fixed-width layout.
pub trait PlainRow {
    /// Column headers
    const HEADERS: [&'static str; 2];

    /// Cell values for this row
    fn cells(&self) -> [String; 2];
}

fn line(first: &str, second: &str) -> String {
    format!(
        "{:<w1$} {:<w2$}",
        first,
        second,
        w1 = FIRST_COLUMN_WIDTH,
        w2 = SECOND_COLUMN_WIDTH
    )
}

/// Format rows under their header. An empty slice yields the header only.
pub fn format_plain<R: PlainRow>(rows: &[R]) -> String {
    let [h1, h2] = R::HEADERS;
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(line(h1, h2));
    lines.push(line(&"-".repeat(h1.len()), &"-".repeat(h2.len())));
    for row in rows {
        let [c1, c2] = row.cells();
        lines.push(line(&c1, &c2));
    }
    lines.join("\n")
}
