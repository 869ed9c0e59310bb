//! Remote lookup and repository identifiers

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::repository::{GitRepo, Result};
use logbook_core::error::GitError;

/// `owner/name` at the end of an https or scp-like remote URL
static REMOTE_PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[:/](?P<owner>[^/:]+)/(?P<name>[^/]+?)(?:\.git)?/?$").expect("Invalid regex")
});

impl GitRepo {
    /// Get list of remote names
    pub fn remotes(&self) -> Result<Vec<String>> {
        let remotes = self.repo.remotes()?;
        Ok(remotes
            .iter()
            .filter_map(|r| r.map(|s| s.to_string()))
            .collect())
    }

    /// Get the URL for a remote
    pub fn remote_url(&self, name: &str) -> Result<Option<String>> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(|s| s.to_string())),
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                Err(GitError::RemoteNotFound(name.to_string()))
            }
            Err(e) => Err(GitError::Git2(e)),
        }
    }

    /// Repository identifier (`owner/name`) derived from a remote URL.
    ///
    /// Returns `None` when the remote does not exist or its URL has no
    /// recognizable owner/name suffix.
    pub fn repository_id(&self, remote: &str) -> Result<Option<String>> {
        let url = match self.remote_url(remote) {
            Ok(Some(url)) => url,
            Ok(None) | Err(GitError::RemoteNotFound(_)) => {
                debug!(remote, "no remote url, repository id unknown");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        Ok(parse_repository_id(&url))
    }
}

/// Parse `owner/name` out of a remote URL
pub fn parse_repository_id(url: &str) -> Option<String> {
    let caps = REMOTE_PATH_REGEX.captures(url.trim())?;
    let owner = caps.name("owner")?.as_str();
    let name = caps.name("name")?.as_str();
    Some(format!("{}/{}", owner, name))
}
