//! Commit log types

use serde::{Deserialize, Serialize};

use crate::category::{Category, Tier};

/// One parsed commit from a log dump
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit hash (full)
    pub hash: String,
    /// Abbreviated hash
    pub short_hash: String,
    /// Author name
    pub author: String,
    /// Author email
    pub email: String,
    /// Author date as `YYYY-MM-DD`, or the raw value when it did not parse
    pub date: String,
    /// Subject line as written
    pub subject: String,
    /// Message body, without the subject
    pub body: String,
    /// Conventional commit type (lowercase)
    #[serde(rename = "type")]
    pub commit_type: Option<String>,
    /// Conventional commit scope
    pub scope: Option<String>,
    /// Subject with any conventional prefix removed
    pub description: String,
    /// Whether this is a breaking change
    pub breaking: bool,
    /// First referenced issue number, 0 when none
    pub issue: u64,
    /// Pull request number from the subject suffix, 0 when none
    pub pr: u64,
    /// Number of files touched
    pub files_changed: u64,
    /// Lines added
    pub insertions: u64,
    /// Lines removed
    pub deletions: u64,
    /// Paths touched, absent when file listing is disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    /// Suggested changelog category
    pub category: Option<Category>,
    /// Whether the author is outside the team, set after parsing
    #[serde(default)]
    pub external: bool,
}

impl Commit {
    /// Create a commit from its header fields
    pub fn new(
        hash: impl Into<String>,
        short_hash: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
        date: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        let subject = subject.into();

        Self {
            hash: hash.into(),
            short_hash: short_hash.into(),
            author: author.into(),
            email: email.into(),
            date: date.into(),
            description: subject.clone(),
            subject,
            body: String::new(),
            commit_type: None,
            scope: None,
            breaking: false,
            issue: 0,
            pr: 0,
            files_changed: 0,
            insertions: 0,
            deletions: 0,
            files: None,
            category: None,
            external: false,
        }
    }

    /// Set the commit body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Get the full message including body
    pub fn full_message(&self) -> String {
        if self.body.is_empty() {
            self.subject.clone()
        } else {
            format!("{}\n\n{}", self.subject, self.body)
        }
    }
}

/// Structured view of a conventional commit header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalCommit {
    /// Commit type, lowercased
    pub commit_type: String,
    /// Scope from the parentheses
    pub scope: Option<String>,
    /// `!` before the colon
    pub breaking: bool,
    /// Text after the colon, trimmed
    pub subject: String,
}

/// A suggested category for a commit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    /// Suggested category
    pub category: Category,
    /// Tier of the suggested category
    pub tier: Tier,
    /// How sure the classifier is, from 0.0 to 1.0
    pub confidence: f64,
    /// Why this category was picked
    pub reasoning: String,
}

impl CategorySuggestion {
    /// Confidence below which a suggestion deserves manual review
    pub const REVIEW_THRESHOLD: f64 = 0.5;

    /// Create a suggestion; the tier is taken from the category
    pub fn new(category: Category, confidence: f64, reasoning: impl Into<String>) -> Self {
        Self {
            category,
            tier: category.tier(),
            confidence,
            reasoning: reasoning.into(),
        }
    }

    /// Whether the suggestion should be reviewed by a person
    pub fn is_low_confidence(&self) -> bool {
        self.confidence < Self::REVIEW_THRESHOLD
    }
}
