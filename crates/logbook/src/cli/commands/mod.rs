//! CLI commands

mod classify;
mod completions;
mod init;
mod parse;

pub use classify::ClassifyCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use parse::ParseCommand;
