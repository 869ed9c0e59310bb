//! Exit codes for the CLI

use logbook_core::{ConfigError, GitError, LogbookError};

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// Exit code for an error returned by a command
pub fn for_error(error: &anyhow::Error) -> i32 {
    for cause in error.chain() {
        if cause.is::<ConfigError>() {
            return CONFIG_ERROR;
        }
        if cause.is::<GitError>() {
            return GIT_ERROR;
        }
        if let Some(e) = cause.downcast_ref::<LogbookError>() {
            match e {
                LogbookError::Config(_) => return CONFIG_ERROR,
                LogbookError::Git(_) => return GIT_ERROR,
                _ => {}
            }
        }
    }

    ERROR
}
