//! Raw log dumps through the git CLI

use std::path::Path;
use std::process::Command;
use std::time::Instant;

use tracing::{info, instrument};

use crate::repository::Result;
use logbook_core::error::GitError;
use logbook_gitlog::{LogRange, LOG_FORMAT};

/// Arguments for a `git log` invocation covering `range`
pub fn log_args(range: &LogRange) -> Vec<String> {
    let mut args = vec![
        "log".to_string(),
        format!("--format={}", LOG_FORMAT),
        "--numstat".to_string(),
        "--no-color".to_string(),
    ];

    if let Some(count) = range.count {
        args.push(format!("-n{}", count));
    }

    if let Some(spec) = range.revision_spec() {
        args.push(spec);
    }

    args
}

/// Dump the commit log of the repository at `workdir` in the sentinel format
/// understood by [`logbook_gitlog::parse_log`]
#[instrument(fields(workdir = %workdir.display()))]
pub fn git_log_dump(workdir: &Path, range: &LogRange) -> Result<String> {
    let start = Instant::now();
    let args = log_args(range);
    let output = Command::new("git")
        .arg("-C")
        .arg(workdir)
        .args(&args)
        .output()?;

    info!(
        duration_ms = start.elapsed().as_millis(),
        bytes = output.stdout.len(),
        success = output.status.success(),
        "git log (CLI)"
    );

    if !output.status.success() {
        let command = match range.revision_spec() {
            Some(spec) => format!("log {}", spec),
            None => "log".to_string(),
        };
        return Err(GitError::CommandFailed {
            command,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use logbook_gitlog::{parse_log, Category, ParseOptions};
    use tempfile::TempDir;

    fn git_available() -> bool {
        Command::new("git").arg("--version").output().is_ok()
    }

    fn commit_file(repo: &Repository, dir: &Path, file: &str, contents: &str, message: &str) {
        let sig = Signature::now("Jane Doe", "jane@example.com").unwrap();
        std::fs::write(dir.join(file), contents).unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new(file)).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

        let parents: Vec<_> = repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok())
            .into_iter()
            .collect();
        let parent_refs: Vec<_> = parents.iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap();
    }

    #[test]
    fn test_log_args_full_range() {
        let range = LogRange::new(Some("v1.0.0".into()), Some("v1.1.0".into()), Some(10));
        let args = log_args(&range);
        assert_eq!(args[0], "log");
        assert!(args[1].starts_with("--format=--LOGBOOK-COMMIT--"));
        assert!(args.contains(&"--numstat".to_string()));
        assert!(args.contains(&"-n10".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("v1.0.0..v1.1.0"));
    }

    #[test]
    fn test_log_args_default_range() {
        let args = log_args(&LogRange::default());
        assert_eq!(args.len(), 4);
        assert!(!args.iter().any(|a| a.starts_with("-n")));
    }

    #[test]
    fn test_dump_and_parse() {
        if !git_available() {
            return;
        }

        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        commit_file(&repo, temp.path(), "a.txt", "one\ntwo\n", "feat(core): add a (#12)");
        commit_file(
            &repo,
            temp.path(),
            "a.txt",
            "one\n",
            "fix: trim a\n\nFixes #7",
        );

        let dump = git_log_dump(temp.path(), &LogRange::default()).unwrap();
        let commits = parse_log(&dump, &ParseOptions::default());
        assert_eq!(commits.len(), 2);

        // Newest first
        assert_eq!(commits[0].commit_type.as_deref(), Some("fix"));
        assert_eq!(commits[0].issue, 7);
        assert_eq!(commits[0].deletions, 1);
        assert_eq!(commits[0].category, Some(Category::Fixed));

        assert_eq!(commits[1].scope.as_deref(), Some("core"));
        assert_eq!(commits[1].pr, 12);
        assert_eq!(commits[1].insertions, 2);
        assert_eq!(commits[1].author, "Jane Doe");
        assert_eq!(commits[1].files.as_deref(), Some(&["a.txt".to_string()][..]));
    }

    #[test]
    fn test_dump_respects_count() {
        if !git_available() {
            return;
        }

        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        commit_file(&repo, temp.path(), "a.txt", "1", "chore: one");
        commit_file(&repo, temp.path(), "a.txt", "2", "chore: two");

        let range = LogRange::new(None, None, Some(1));
        let dump = git_log_dump(temp.path(), &range).unwrap();
        assert_eq!(parse_log(&dump, &ParseOptions::default()).len(), 1);
    }

    #[test]
    fn test_unknown_revision_fails() {
        if !git_available() {
            return;
        }

        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        commit_file(&repo, temp.path(), "a.txt", "1", "chore: one");

        let range = LogRange::new(Some("no-such-tag".into()), None, None);
        let result = git_log_dump(temp.path(), &range);
        assert!(matches!(result, Err(GitError::CommandFailed { .. })));
    }
}
