//! Logbook Core - Shared foundation for the logbook workspace
//!
//! This crate provides the error taxonomy and the configuration layer used by
//! the git collaborator and the CLI.

pub mod config;
pub mod error;

pub use config::{load_config_or_default, Config};
pub use error::{ConfigError, GitError, LogbookError, Result};
