//! LookML view scanning for `${TABLE}.column` references.
//!
//! Scanning is line-based; multi-line `sql:` parameters are out of scope. A
//! line only counts when it carries both the `sql:` parameter marker and the
//! table placeholder, matched case-sensitively.

use std::{collections::BTreeSet, fs, path::Path};

use anyhow::{Context, Result};
use log::debug;

pub const TABLE_PLACEHOLDER: &str = "${TABLE}.";

/// Everything one scan pass extracts from a LookML file.
#[derive(Debug, Default, Clone)]
pub struct ScanOutcome {
    /// Lower-cased column names referenced anywhere in the file.
    pub referenced: BTreeSet<String>,
    /// Every reference in file order, original casing preserved. Used by the
    /// missing-column report, which warns once per occurrence.
    pub occurrences: Vec<String>,
}

/// Scans a LookML file. A pure function of the file contents: rescanning the
/// same file always produces the same outcome.
pub fn scan(path: &Path) -> Result<ScanOutcome> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Reading LookML file {path:?}"))?;
    Ok(scan_lines(contents.lines()))
}

pub fn scan_lines<'a, I>(lines: I) -> ScanOutcome
where
    I: IntoIterator<Item = &'a str>,
{
    let mut outcome = ScanOutcome::default();
    for line in lines {
        if let Some(column) = reference_in_line(line) {
            debug!("Referenced column: [{column}]");
            outcome.referenced.insert(column.to_lowercase());
            outcome.occurrences.push(column);
        }
    }
    outcome
}

/// Extracts the column referenced on one line, or `None` when the line does
/// not carry a `sql: ${TABLE}.<column>[,:=...] ;` pattern.
///
/// The extracted text runs from the first placeholder to the first `;` on the
/// line, then is truncated at the first `,`, `:`, and `=` in that order —
/// LookML syntax for parameter lists, casts, and filters trailing a bare
/// column reference.
pub fn reference_in_line(line: &str) -> Option<String> {
    if !line.contains("sql:") || !line.contains(TABLE_PLACEHOLDER) {
        return None;
    }
    let mut column = between(line, TABLE_PLACEHOLDER, ";")?;
    for stop in [",", ":", "="] {
        column = before(column, stop);
    }
    let column = column.trim();
    if column.is_empty() {
        None
    } else {
        Some(column.to_string())
    }
}

/// Substring strictly between the end of the first `a` and the first `b`.
/// `None` when either anchor is missing or `b` starts at or before the end
/// of `a`.
fn between<'a>(value: &'a str, a: &str, b: &str) -> Option<&'a str> {
    let start = value.find(a)? + a.len();
    let end = value.find(b)?;
    if start >= end {
        return None;
    }
    Some(&value[start..end])
}

/// The prefix of `value` before the first `needle`, or all of `value` when
/// the needle does not occur.
fn before<'a>(value: &'a str, needle: &str) -> &'a str {
    match value.find(needle) {
        Some(pos) => &value[..pos],
        None => value,
    }
}
