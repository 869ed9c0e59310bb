//! Issue, pull request and breaking-change reference extraction
//!
//! Each extractor returns a "not found" value (0 or `false`) instead of an
//! error.

use regex::Regex;
use std::sync::LazyLock;

/// `#123`, optionally preceded by a closing keyword
static ISSUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\b(?:close[sd]?|fix(?:e[sd])?|resolve[sd]?|refs?)\b[\s:]*)?#(?P<number>\d+)",
    )
    .expect("Invalid regex")
});

/// `(#123)` at the end of a subject line
static PR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#(?P<number>\d+)\)\s*$").expect("Invalid regex"));

/// `BREAKING CHANGE:` or `BREAKING-CHANGE:` at the start of a line
static BREAKING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^BREAKING[ -]CHANGE\s*:").expect("Invalid regex"));

/// Extract the first issue number referenced in `message`.
///
/// Only the earliest `#N` in the text is returned, even when several
/// issues are referenced.
pub fn extract_issue_number(message: &str) -> u64 {
    ISSUE_REGEX
        .captures(message)
        .and_then(|caps| caps.name("number"))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Extract a pull request number from a `(#N)` suffix on the subject line
pub fn extract_pr_number(subject: &str) -> u64 {
    let line = subject.lines().next().unwrap_or_default();
    PR_REGEX
        .captures(line)
        .and_then(|caps| caps.name("number"))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Whether any line of `body` starts with a breaking-change marker
pub fn has_breaking_marker(body: &str) -> bool {
    body.lines().any(|line| BREAKING_REGEX.is_match(line))
}
