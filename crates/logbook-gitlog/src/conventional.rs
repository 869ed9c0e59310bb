//! Conventional Commits header parser
//!
//! Parses headers of the form `type(scope)!: subject`:
//! https://www.conventionalcommits.org/

use regex::Regex;
use std::sync::LazyLock;

use crate::types::ConventionalCommit;

/// Regex for a conventional commit header line
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>[A-Za-z]+)(?:\((?P<scope>[^)]*)\))?(?P<breaking>!)?\s*:\s*(?P<subject>.*)$",
    )
    .expect("Invalid regex")
});

/// Parse the first line of `message` as a conventional commit header.
///
/// Returns `None` when the line has no `type: subject` structure, which is
/// the normal outcome for free-form messages.
pub fn parse_conventional(message: &str) -> Option<ConventionalCommit> {
    let header = message.lines().next()?;
    let caps = HEADER_REGEX.captures(header)?;

    let commit_type = caps.name("type")?.as_str().to_lowercase();
    let scope = caps
        .name("scope")
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let breaking = caps.name("breaking").is_some();
    let subject = caps
        .name("subject")
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    Some(ConventionalCommit {
        commit_type,
        scope,
        breaking,
        subject,
    })
}
