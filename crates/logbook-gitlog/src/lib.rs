//! Logbook Gitlog - Commit log parsing and changelog classification
//!
//! This crate turns a sentinel-delimited `git log --numstat` dump into
//! structured commits, extracts conventional-commit fields and references,
//! suggests a changelog category for every commit and aggregates the
//! results into a [`ParseResult`].
//!
//! Nothing here fails: malformed input is skipped or falls back to a
//! low-confidence default.

pub mod block;
pub mod category;
pub mod classifier;
pub mod conventional;
pub mod numstat;
pub mod references;
pub mod result;
pub mod types;

pub use block::{parse_block, parse_log, ParseOptions, BODY_END, COMMIT_DELIMITER, LOG_FORMAT};
pub use category::{Category, Tier, UnknownCategory};
pub use classifier::{classify_conventional, classify_heuristic, classify_message, suggest_category};
pub use conventional::parse_conventional;
pub use numstat::{parse_numstat, NumstatSummary};
pub use references::{extract_issue_number, extract_pr_number, has_breaking_marker};
pub use result::{Contributor, LogRange, ParseResult, Summary};
pub use types::{CategorySuggestion, Commit, ConventionalCommit};
