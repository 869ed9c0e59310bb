//! Parse results, running summaries and contributor ranking

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::Category;
use crate::types::Commit;

/// Key used in `by_type` for commits without a conventional type
pub const UNTYPED_KEY: &str = "other";

/// The commit range a result was produced for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRange {
    /// Exclusive lower bound (tag or revision)
    pub since: Option<String>,
    /// Inclusive upper bound, HEAD when absent
    pub until: Option<String>,
    /// Maximum number of commits requested
    pub count: Option<usize>,
}

impl LogRange {
    /// Create a range
    pub fn new(since: Option<String>, until: Option<String>, count: Option<usize>) -> Self {
        Self {
            since,
            until,
            count,
        }
    }

    /// Revision argument for `git log`, `None` meaning all of HEAD
    pub fn revision_spec(&self) -> Option<String> {
        match (&self.since, &self.until) {
            (Some(since), Some(until)) => Some(format!("{}..{}", since, until)),
            (Some(since), None) => Some(format!("{}..HEAD", since)),
            (None, Some(until)) => Some(until.clone()),
            (None, None) => None,
        }
    }
}

/// Running totals over the commits in a result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of commits
    pub total_commits: usize,
    /// Commits per conventional type
    pub by_type: BTreeMap<String, usize>,
    /// Commits per suggested category
    pub by_category: BTreeMap<Category, usize>,
    /// Commits without a suggested category
    pub uncategorized: usize,
    /// Commits flagged as breaking
    pub breaking_changes: usize,
    /// Sum of files changed
    pub files_changed: u64,
    /// Sum of lines added
    pub insertions: u64,
    /// Sum of lines removed
    pub deletions: u64,
}

impl Summary {
    /// Fold one commit into the totals
    fn record(&mut self, commit: &Commit) {
        self.total_commits += 1;

        let commit_type = commit.commit_type.as_deref().unwrap_or(UNTYPED_KEY);
        *self.by_type.entry(commit_type.to_string()).or_default() += 1;

        match commit.category {
            Some(category) => *self.by_category.entry(category).or_default() += 1,
            None => self.uncategorized += 1,
        }

        if commit.breaking {
            self.breaking_changes += 1;
        }

        self.files_changed += commit.files_changed;
        self.insertions += commit.insertions;
        self.deletions += commit.deletions;
    }
}

/// A commit author and their share of the result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Author name as recorded in the commits
    pub name: String,
    /// Number of commits by this author
    pub commit_count: usize,
    /// Whether any of the author's commits is flagged external
    pub is_external: bool,
}

/// The output of one parsing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    repository: Option<String>,
    range: LogRange,
    generated_at: DateTime<Utc>,
    commits: Vec<Commit>,
    summary: Summary,
    contributors: Vec<Contributor>,
}

impl ParseResult {
    /// Create an empty result for `range`
    pub fn new(repository: Option<String>, range: LogRange) -> Self {
        Self {
            repository,
            range,
            generated_at: Utc::now(),
            commits: Vec::new(),
            summary: Summary::default(),
            contributors: Vec::new(),
        }
    }

    /// Create a result holding `commits`, in order
    pub fn from_commits(
        repository: Option<String>,
        range: LogRange,
        commits: impl IntoIterator<Item = Commit>,
    ) -> Self {
        let mut result = Self::new(repository, range);
        for commit in commits {
            result.add_commit(commit);
        }
        result
    }

    /// Append a commit and update the running summary
    pub fn add_commit(&mut self, commit: Commit) {
        self.summary.record(&commit);
        self.commits.push(commit);
    }

    /// Apply an external-contributor decision to every commit.
    ///
    /// Contributors are not updated; call [`compute_contributors`] after
    /// the flags are final.
    ///
    /// [`compute_contributors`]: ParseResult::compute_contributors
    pub fn mark_external<F>(&mut self, mut is_external: F)
    where
        F: FnMut(&Commit) -> bool,
    {
        for commit in &mut self.commits {
            commit.external = is_external(commit);
        }
    }

    /// Rebuild the contributor list from the commits.
    ///
    /// Authors are grouped by exact name. Authors with at least one
    /// external commit come first; within each group authors are ordered
    /// by descending commit count, ties keeping first-appearance order.
    pub fn compute_contributors(&mut self) {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut grouped: Vec<Contributor> = Vec::new();

        for commit in &self.commits {
            match index.get(commit.author.as_str()) {
                Some(&i) => {
                    let contributor = &mut grouped[i];
                    contributor.commit_count += 1;
                    contributor.is_external |= commit.external;
                }
                None => {
                    index.insert(commit.author.as_str(), grouped.len());
                    grouped.push(Contributor {
                        name: commit.author.clone(),
                        commit_count: 1,
                        is_external: commit.external,
                    });
                }
            }
        }

        let (mut external, mut internal): (Vec<_>, Vec<_>) =
            grouped.into_iter().partition(|c| c.is_external);
        external.sort_by(|a, b| b.commit_count.cmp(&a.commit_count));
        internal.sort_by(|a, b| b.commit_count.cmp(&a.commit_count));

        debug!(
            external = external.len(),
            internal = internal.len(),
            "computed contributors"
        );

        external.extend(internal);
        self.contributors = external;
    }

    /// Repository identifier
    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    /// Requested range
    pub fn range(&self) -> &LogRange {
        &self.range
    }

    /// When this result was created
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Parsed commits, in log order
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// Running summary
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Contributors as of the last [`compute_contributors`] call
    ///
    /// [`compute_contributors`]: ParseResult::compute_contributors
    pub fn contributors(&self) -> &[Contributor] {
        &self.contributors
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
