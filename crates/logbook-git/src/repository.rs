//! Read-only repository handle

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository};
use tracing::{info, instrument};

use logbook_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// An opened repository and the directory git commands should run in
pub struct GitRepo {
    pub(crate) repo: Repository,
    workdir: PathBuf,
}

impl GitRepo {
    /// Open the repository rooted exactly at `path`
    #[instrument(fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::open(path).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitError::RepositoryNotFound(path.to_path_buf()),
            _ => GitError::OpenFailed(e.to_string()),
        })?;
        Ok(Self::from_repository(repo))
    }

    /// Open the repository containing `start`, searching parent directories
    #[instrument(fields(start = %start.display()))]
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = Repository::discover(start).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitError::NotARepository(start.to_path_buf()),
            _ => GitError::OpenFailed(e.to_string()),
        })?;
        Ok(Self::from_repository(repo))
    }

    fn from_repository(repo: Repository) -> Self {
        // Bare repositories have no workdir; git runs fine in the git dir
        let workdir = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        info!(workdir = %workdir.display(), bare = repo.is_bare(), "opened repository");
        Self { repo, workdir }
    }

    /// Directory to run git commands in
    pub fn path(&self) -> &Path {
        &self.workdir
    }

    /// Whether HEAD points at a commit yet
    pub fn has_commits(&self) -> bool {
        self.repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .is_ok()
    }
}
