//! Report rendering and printing utilities.
//!
//! Rendering turns the scan result into the text written to stdout (JSON or
//! Markdown). The colored summary goes to stderr so that stdout stays
//! machine-readable.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::config::OutputFormat;
use crate::core::{MissingTranslation, ScanReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const TABLE_HEADER: [&str; 4] = ["#", "Name", "Default Value", "Missing Locales"];

/// Render the report in the requested format.
pub fn render(format: OutputFormat, title: &str, missing: &[MissingTranslation]) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(missing),
        OutputFormat::Markdown => Ok(render_markdown(title, missing)),
    }
}

/// Pretty-printed JSON array of records, two-space indented.
pub fn render_json(missing: &[MissingTranslation]) -> Result<String> {
    serde_json::to_string_pretty(missing).context("Failed to render report as JSON")
}

/// Markdown document with a heading, the table (or a "nothing missing" line)
/// and a footer.
pub fn render_markdown(title: &str, missing: &[MissingTranslation]) -> String {
    let body = if missing.is_empty() {
        "No missing translations found.\n".to_string()
    } else {
        render_markdown_table(missing)
    };

    format!(
        "# {}\n\n{}\n_Generated using {}._\n",
        title,
        body,
        env!("CARGO_PKG_NAME")
    )
}

/// GitHub-flavored table, columns padded to their display width.
pub fn render_markdown_table(missing: &[MissingTranslation]) -> String {
    let rows: Vec<[String; 4]> = missing
        .iter()
        .enumerate()
        .map(|(i, item)| {
            [
                (i + 1).to_string(),
                format!("`{}`", escape_cell(&item.name)),
                escape_cell(&item.value),
                escape_cell(&item.missing_locales_string()),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADER.map(|header| header.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let mut table = String::new();
    push_row(&mut table, &TABLE_HEADER, &widths);
    let separator = widths.map(|w| "-".repeat(w));
    push_row(&mut table, &separator, &widths);
    for row in &rows {
        push_row(&mut table, row, &widths);
    }
    table
}

fn push_row<S: AsRef<str>>(table: &mut String, cells: &[S; 4], widths: &[usize; 4]) {
    table.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        let cell = cell.as_ref();
        let padding = width.saturating_sub(UnicodeWidthStr::width(cell));
        table.push(' ');
        table.push_str(cell);
        table.push_str(&" ".repeat(padding));
        table.push_str(" |");
    }
    table.push('\n');
}

/// Keep a value on one table row: escape pipes, turn line breaks into `<br>`.
fn escape_cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

/// Print a one-line summary of the scan to stderr.
pub fn print_summary(report: &ScanReport) {
    print_summary_to(report, &mut io::stderr().lock());
}

/// Print the summary to a custom writer.
pub fn print_summary_to<W: Write>(report: &ScanReport, writer: &mut W) {
    let files = report.files.len();
    let locales = report.locales.len();
    let checked = format!(
        "Checked {} resource {} across {} {}",
        files,
        if files == 1 { "file" } else { "files" },
        locales,
        if locales == 1 { "locale" } else { "locales" }
    );

    let msg = if report.missing.is_empty() {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} - no missing translations", checked).green()
        )
    } else {
        let count = report.missing.len();
        format!(
            "{} {} - {} {} missing translations",
            FAILURE_MARK.red(),
            checked,
            count.to_string().red(),
            if count == 1 { "string" } else { "strings" }
        )
    };
    let _ = writeln!(writer, "{}", msg);
}
