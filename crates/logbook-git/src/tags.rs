//! Tag discovery

use regex::Regex;
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;
use logbook_core::error::GitError;

impl GitRepo {
    /// All tags that resolve to a commit, lightweight and annotated alike
    #[instrument(skip(self))]
    pub fn tags(&self) -> Result<Vec<TagInfo>> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::with_capacity(names.len());

        for name in names.iter().flatten() {
            match self.resolve_tag(name) {
                Ok(Some(tag)) => tags.push(tag),
                Ok(None) => {}
                Err(e) => debug!(tag = name, error = %e, "skipping unresolvable tag"),
            }
        }

        debug!(count = tags.len(), "listed tags");
        Ok(tags)
    }

    /// Tags whose names match `pattern` (a regex)
    pub fn tags_matching(&self, pattern: &str) -> Result<Vec<TagInfo>> {
        let regex = Regex::new(pattern).map_err(|e| GitError::InvalidTagPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        let mut tags = self.tags()?;
        tags.retain(|t| regex.is_match(&t.name));
        Ok(tags)
    }

    /// Highest-versioned tag, optionally restricted to names matching `pattern`.
    ///
    /// Tags without a parseable version are ignored.
    #[instrument(skip(self))]
    pub fn find_latest_tag(&self, pattern: Option<&str>) -> Result<Option<TagInfo>> {
        let tags = match pattern {
            Some(pattern) => self.tags_matching(pattern)?,
            None => self.tags()?,
        };

        let latest = tags
            .into_iter()
            .filter(|t| t.version.is_some())
            .max_by(|a, b| a.cmp_version(b));

        debug!(latest = ?latest.as_ref().map(|t| &t.name), "resolved latest tag");
        Ok(latest)
    }

    fn resolve_tag(&self, name: &str) -> Result<Option<TagInfo>> {
        let reference = match self.repo.find_reference(&format!("refs/tags/{}", name)) {
            Ok(reference) => reference,
            Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // Tags on trees or blobs have no commit to anchor a range
        match reference.peel_to_commit() {
            Ok(commit) => Ok(Some(TagInfo::new(name, commit.id().to_string()))),
            Err(e) if e.code() == git2::ErrorCode::Peel => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
