//! Report formatting and printing utilities.
//!
//! Displays issues in cargo-style format and token listings as aligned
//! tables. Kept apart from the engine so tokenctl can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{CatalogEntry, Category, CategoryBuckets};
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Placeholder shown for tokens whose reference chain does not resolve.
const UNRESOLVED_PLACEHOLDER: &str = "(unresolved)";

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(token_count: usize) {
    print_success_to(token_count, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(token_count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} - no issues found",
            token_count,
            if token_count == 1 { "token" } else { "tokens" }
        )
        .green()
    );
}

/// Print the categorized token listing to stdout.
pub fn print_listing(buckets: &CategoryBuckets, categories: &[Category]) {
    print_listing_to(buckets, categories, &mut io::stdout().lock());
}

/// Print the categorized token listing to a custom writer.
///
/// Categories print in the order given; empty ones are skipped.
pub fn print_listing_to<W: Write>(
    buckets: &CategoryBuckets,
    categories: &[Category],
    writer: &mut W,
) {
    let shown: Vec<(Category, &[CatalogEntry])> = categories
        .iter()
        .map(|&c| (c, buckets.get(c)))
        .filter(|(_, entries)| !entries.is_empty())
        .collect();

    if shown.is_empty() {
        let _ = writeln!(writer, "{}", "No tokens found".yellow());
        return;
    }

    let path_width = column_width(shown.iter().flat_map(|(_, e)| e.iter()), |e| e.path.clone());
    let value_width = column_width(shown.iter().flat_map(|(_, e)| e.iter()), display_value);

    for (i, (category, entries)) in shown.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(writer);
        }
        let _ = writeln!(
            writer,
            "{} {}",
            category.key().bold(),
            format!("({})", entries.len()).dimmed()
        );
        for entry in entries.iter() {
            let value = display_value(entry);
            let value = if entry.value.is_some() {
                value.normal()
            } else {
                value.dimmed()
            };
            let _ = writeln!(
                writer,
                "  {}{}  {}{}  {}",
                entry.path,
                padding(&entry.path, path_width),
                value,
                padding(&display_value(entry), value_width),
                entry.token_type.dimmed().cyan()
            );
        }
    }
}

/// Print a "token not found" error to stderr.
pub fn print_not_found(token_path: &str) {
    print_not_found_to(token_path, &mut io::stderr().lock());
}

/// Print a "token not found" error to a custom writer.
pub fn print_not_found_to<W: Write>(token_path: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} \"{}\"",
        FAILURE_MARK.red(),
        "Token not found:".red(),
        token_path
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();

    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line
    let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), loc.file_path, loc.line);

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 {
                "problem"
            } else {
                "problems"
            },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .map(|i| i.location().line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    a.location()
        .cmp(b.location())
        .then_with(|| a.report_rule().cmp(&b.report_rule()))
        .then_with(|| a.message().cmp(&b.message()))
}

fn display_value(entry: &CatalogEntry) -> String {
    entry
        .value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| UNRESOLVED_PLACEHOLDER.to_string())
}

fn column_width<'a>(
    entries: impl Iterator<Item = &'a CatalogEntry>,
    cell: impl Fn(&CatalogEntry) -> String,
) -> usize {
    entries
        .map(|e| UnicodeWidthStr::width(cell(e).as_str()))
        .max()
        .unwrap_or(0)
}

fn padding(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(UnicodeWidthStr::width(text)))
}

// ============================================================
// Tests
// ============================================================
