//! Error types for logbook

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LogbookError
pub type Result<T> = std::result::Result<T, LogbookError>;

/// Main error type for logbook operations
#[derive(Debug, Error)]
pub enum LogbookError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Configuration file already exists
    #[error("Configuration file already exists at {0}")]
    AlreadyExists(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Invalid tag pattern
    #[error("Invalid tag pattern '{pattern}': {reason}")]
    InvalidTagPattern { pattern: String, reason: String },

    /// Remote not found
    #[error("Remote not found: {0}")]
    RemoteNotFound(String),

    /// The git executable failed
    #[error("git {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// The git executable could not be spawned
    #[error("Failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_transparent() {
        let err: LogbookError = ConfigError::InvalidValue {
            field: "parse.max_commits".to_string(),
            message: "must be greater than zero".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: parse.max_commits - must be greater than zero"
        );
    }

    #[test]
    fn test_git_command_failed_display() {
        let err = GitError::CommandFailed {
            command: "log".to_string(),
            stderr: "fatal: bad revision".to_string(),
        };
        assert_eq!(err.to_string(), "git log failed: fatal: bad revision");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LogbookError = io_err.into();
        assert!(err.to_string().starts_with("IO error"));
    }
}
