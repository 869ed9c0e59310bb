//! Logbook Git - Read-only repository access for logbook
//!
//! This crate discovers repositories, resolves release tags into a default
//! range, derives a repository identifier from the remote and runs
//! `git log` to produce the dump parsed by `logbook-gitlog`.

mod log;
mod remote;
mod repository;
mod tags;
pub mod types;

pub use log::{git_log_dump, log_args};
pub use remote::parse_repository_id;
pub use repository::{GitRepo, Result};
pub use types::{parse_tag_version, TagInfo};
