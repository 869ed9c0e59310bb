//! Commit log dump parsing
//!
//! A dump is a sequence of blocks, each introduced by [`COMMIT_DELIMITER`].
//! Inside a block six metadata lines (hash, short hash, author, email, date,
//! subject) are followed by the body, the [`BODY_END`] sentinel and any
//! numstat lines.

use chrono::DateTime;
use tracing::{debug, info, instrument};

use crate::classifier::suggest_category;
use crate::conventional::parse_conventional;
use crate::numstat::parse_numstat;
use crate::references::{extract_issue_number, extract_pr_number, has_breaking_marker};
use crate::types::Commit;

/// Sentinel that starts every commit block
pub const COMMIT_DELIMITER: &str = "--LOGBOOK-COMMIT--";

/// Sentinel that ends the commit body
pub const BODY_END: &str = "--LOGBOOK-END--";

/// `git log --format` string producing blocks this parser understands
pub const LOG_FORMAT: &str = "--LOGBOOK-COMMIT--%n%H%n%h%n%an%n%ae%n%aI%n%s%n%b--LOGBOOK-END--";

/// Number of fixed metadata lines at the top of each block
const METADATA_LINES: usize = 6;

/// Options controlling how blocks are turned into commits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Keep the list of changed paths on each commit
    pub include_files: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            include_files: true,
        }
    }
}

impl ParseOptions {
    /// Set whether changed paths are kept
    pub fn with_files(mut self, include: bool) -> Self {
        self.include_files = include;
        self
    }
}

/// Parse a complete log dump into commits, in dump order.
///
/// Blocks with fewer than six metadata lines are dropped.
#[instrument(skip(text, options), fields(bytes = text.len()))]
pub fn parse_log(text: &str, options: &ParseOptions) -> Vec<Commit> {
    let mut commits = Vec::new();
    let mut dropped = 0usize;

    for block in text.split(COMMIT_DELIMITER) {
        if block.trim().is_empty() {
            continue;
        }

        match parse_block(block, options) {
            Some(commit) => commits.push(commit),
            None => dropped += 1,
        }
    }

    info!(commit_count = commits.len(), dropped, "parsed commit log");
    commits
}

/// Parse a single block (without its leading delimiter) into a commit
pub fn parse_block(block: &str, options: &ParseOptions) -> Option<Commit> {
    let (metadata, numstat) = match block.split_once(BODY_END) {
        Some((metadata, numstat)) => (metadata, Some(numstat)),
        None => (block, None),
    };

    let lines: Vec<&str> = metadata
        .trim_start_matches(['\r', '\n'])
        .lines()
        .collect();
    if lines.len() < METADATA_LINES {
        debug!(lines = lines.len(), "dropping malformed commit block");
        return None;
    }

    let subject = lines[5].trim_end();
    let body = lines[METADATA_LINES..].join("\n").trim_end().to_string();

    let mut commit = Commit::new(
        lines[0].trim(),
        lines[1].trim(),
        lines[2].trim(),
        lines[3].trim(),
        format_date(lines[4].trim()),
        subject,
    )
    .with_body(body);

    if let Some(parsed) = parse_conventional(subject) {
        commit.commit_type = Some(parsed.commit_type);
        commit.scope = parsed.scope;
        commit.description = parsed.subject;
        commit.breaking = parsed.breaking;
    }

    if !commit.breaking && !commit.body.is_empty() {
        commit.breaking = has_breaking_marker(&commit.body);
    }

    let message = commit.full_message();
    commit.issue = extract_issue_number(&message);
    commit.pr = extract_pr_number(subject);

    if let Some(numstat) = numstat {
        let stats = parse_numstat(numstat, options.include_files);
        commit.files_changed = stats.files_changed;
        commit.insertions = stats.insertions;
        commit.deletions = stats.deletions;
        if options.include_files {
            commit.files = Some(stats.files);
        }
    }

    commit.category = suggest_category(commit.commit_type.as_deref(), commit.breaking, &message)
        .map(|suggestion| suggestion.category);

    Some(commit)
}

/// Reformat a strict RFC 3339 timestamp as `YYYY-MM-DD`, keeping the raw
/// value when it does not parse
fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn block(subject: &str, body: &str, numstat: &str) -> String {
        format!(
            "{COMMIT_DELIMITER}\n\
             1234567890abcdef1234567890abcdef12345678\n\
             1234567\n\
             Alice Example\n\
             alice@example.com\n\
             2024-03-05T14:30:00+01:00\n\
             {subject}\n\
             {body}{BODY_END}\n\
             {numstat}"
        )
    }

    #[test]
    fn test_log_format_uses_sentinels() {
        assert!(LOG_FORMAT.starts_with(COMMIT_DELIMITER));
        assert!(LOG_FORMAT.ends_with(BODY_END));
    }

    #[test]
    fn test_parse_single_conventional_commit() {
        let text = block("feat(api): add endpoint (#42)", "", "\n10\t2\tsrc/api.rs\n");
        let commits = parse_log(&text, &ParseOptions::default());
        assert_eq!(commits.len(), 1);

        let commit = &commits[0];
        assert_eq!(commit.hash, "1234567890abcdef1234567890abcdef12345678");
        assert_eq!(commit.short_hash, "1234567");
        assert_eq!(commit.author, "Alice Example");
        assert_eq!(commit.email, "alice@example.com");
        assert_eq!(commit.date, "2024-03-05");
        assert_eq!(commit.subject, "feat(api): add endpoint (#42)");
        assert_eq!(commit.commit_type.as_deref(), Some("feat"));
        assert_eq!(commit.scope.as_deref(), Some("api"));
        assert_eq!(commit.description, "add endpoint (#42)");
        assert_eq!(commit.pr, 42);
        assert_eq!(commit.issue, 42);
        assert_eq!(commit.files_changed, 1);
        assert_eq!(commit.insertions, 10);
        assert_eq!(commit.deletions, 2);
        assert_eq!(commit.files, Some(vec!["src/api.rs".to_string()]));
        assert_eq!(commit.category, Some(Category::Added));
        assert!(!commit.breaking);
    }

    #[test]
    fn test_non_conventional_subject_stands() {
        let text = block("Fix security vulnerability", "", "");
        let commit = &parse_log(&text, &ParseOptions::default())[0];
        assert!(commit.commit_type.is_none());
        assert_eq!(commit.description, "Fix security vulnerability");
        assert_eq!(commit.category, Some(Category::Security));
    }

    #[test]
    fn test_body_marker_sets_breaking() {
        let text = block(
            "feat: change API",
            "Some details.\n\nBREAKING CHANGE: old method removed\nCloses #456\n",
            "",
        );
        let commit = &parse_log(&text, &ParseOptions::default())[0];
        assert!(commit.breaking);
        assert_eq!(commit.category, Some(Category::Breaking));
        assert_eq!(commit.issue, 456);
        assert_eq!(
            commit.body,
            "Some details.\n\nBREAKING CHANGE: old method removed\nCloses #456"
        );
    }

    #[test]
    fn test_header_marker_sets_breaking() {
        let text = block("refactor(core)!: drop v1", "", "");
        let commit = &parse_log(&text, &ParseOptions::default())[0];
        assert!(commit.breaking);
        assert_eq!(commit.category, Some(Category::Breaking));
    }

    #[test]
    fn test_unknown_conventional_type_has_no_category() {
        let text = block("wip: half done", "", "");
        let commit = &parse_log(&text, &ParseOptions::default())[0];
        assert_eq!(commit.commit_type.as_deref(), Some("wip"));
        assert!(commit.category.is_none());
    }

    #[test]
    fn test_files_disabled_keeps_counts() {
        let text = block("fix: y", "", "\n10\t5\tfoo.go\n-\t-\tbinary.png\n");
        let options = ParseOptions::default().with_files(false);
        let commit = &parse_log(&text, &options)[0];
        assert_eq!(commit.files_changed, 2);
        assert_eq!(commit.insertions, 10);
        assert_eq!(commit.deletions, 5);
        assert!(commit.files.is_none());
    }

    #[test]
    fn test_bad_date_falls_back_to_raw() {
        let text = block("fix: y", "", "").replace("2024-03-05T14:30:00+01:00", "yesterday");
        let commit = &parse_log(&text, &ParseOptions::default())[0];
        assert_eq!(commit.date, "yesterday");
    }

    #[test]
    fn test_malformed_block_is_dropped() {
        let good = block("fix: y", "", "");
        let text = format!("{COMMIT_DELIMITER}\nabc\nabc\nonly three lines\n{good}");
        let commits = parse_log(&text, &ParseOptions::default());
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].subject, "fix: y");
    }

    #[test]
    fn test_multiple_commits_keep_order() {
        let text = format!(
            "{}{}{}",
            block("feat: one", "", "\n1\t0\ta.rs\n"),
            block("fix: two", "", "\n0\t1\tb.rs\n"),
            block("Update something", "", "\n")
        );
        let commits = parse_log(&text, &ParseOptions::default());
        let subjects: Vec<&str> = commits.iter().map(|c| c.subject.as_str()).collect();
        assert_eq!(subjects, vec!["feat: one", "fix: two", "Update something"]);
        assert_eq!(commits[2].category, Some(Category::Changed));
        assert_eq!(commits[2].files, Some(vec![]));
    }

    #[test]
    fn test_block_without_body_end() {
        let text = block("docs: readme", "", "").replace(BODY_END, "");
        let commit = &parse_log(&text, &ParseOptions::default())[0];
        assert_eq!(commit.files_changed, 0);
        assert!(commit.files.is_none());
        assert_eq!(commit.category, Some(Category::Documentation));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_log("", &ParseOptions::default()).is_empty());
        assert!(parse_log("\n\n", &ParseOptions::default()).is_empty());
    }
}
