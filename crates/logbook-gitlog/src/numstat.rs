//! `git log --numstat` record parsing
//!
//! Each record is `<insertions>\t<deletions>\t<path>`. Binary files report
//! `-` instead of line counts; they count as a changed file with no lines.
//! Lines that do not fit this shape are skipped.

use regex::Regex;
use std::sync::LazyLock;

/// Marker git uses in place of a line count for binary files
const BINARY_MARKER: &str = "-";

/// Braced rename notation: `src/{old => new}/file.rs`
static BRACED_RENAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]* => ([^}]*)\}").expect("Invalid regex"));

/// Aggregated change counts for one commit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumstatSummary {
    /// Number of file records seen
    pub files_changed: u64,
    /// Total lines added
    pub insertions: u64,
    /// Total lines removed
    pub deletions: u64,
    /// Paths touched, only filled when paths are retained
    pub files: Vec<String>,
}

/// A single parsed numstat record
#[derive(Debug, Clone, PartialEq, Eq)]
struct NumstatEntry<'a> {
    insertions: u64,
    deletions: u64,
    path: &'a str,
}

/// Parse every numstat line in `text`.
///
/// Counts are always aggregated; `include_files` only controls whether the
/// touched paths are kept.
pub fn parse_numstat(text: &str, include_files: bool) -> NumstatSummary {
    let mut summary = NumstatSummary::default();

    for entry in text.lines().filter_map(parse_numstat_line) {
        summary.files_changed += 1;
        summary.insertions += entry.insertions;
        summary.deletions += entry.deletions;

        if include_files {
            summary.files.push(normalize_path(entry.path));
        }
    }

    summary
}

fn parse_numstat_line(line: &str) -> Option<NumstatEntry<'_>> {
    let mut parts = line.splitn(3, '\t');
    let insertions = parse_count(parts.next()?)?;
    let deletions = parse_count(parts.next()?)?;
    let path = parts.next()?.trim();

    if path.is_empty() {
        return None;
    }

    Some(NumstatEntry {
        insertions,
        deletions,
        path,
    })
}

fn parse_count(field: &str) -> Option<u64> {
    let field = field.trim();
    if field == BINARY_MARKER {
        Some(0)
    } else {
        field.parse().ok()
    }
}

/// Resolve rename notation to the destination path
fn normalize_path(raw: &str) -> String {
    if raw.contains('{') && raw.contains(" => ") {
        let replaced = BRACED_RENAME_REGEX.replace(raw, "$1");
        return replaced.replace("//", "/");
    }

    match raw.rsplit_once(" => ") {
        Some((_, new_path)) => new_path.to_string(),
        None => raw.to_string(),
    }
}
