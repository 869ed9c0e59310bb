//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use logbook_core::config::{load_config, load_config_or_default, Config};
use logbook_core::LogbookError;

use commands::{ClassifyCommand, CompletionsCommand, InitCommand, ParseCommand};

/// Logbook - Commit history parsing and changelog classification
#[derive(Debug, Parser)]
#[command(name = "logbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format (defaults to `output.format` from the config)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Configuration file (skips the directory search)
    #[arg(long, global = true, env = "LOGBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse commit history into categorized commits
    Parse(ParseCommand),

    /// Suggest a changelog category for a commit message
    Classify(ClassifyCommand),

    /// Write a default logbook.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Parse(ref cmd) => cmd.execute(&self),
            Commands::Classify(ref cmd) => cmd.execute(&self),
            Commands::Init(ref cmd) => cmd.execute(&self),
            Commands::Completions(ref cmd) => cmd.execute(&self),
        }
    }

    /// Load the configuration for `cwd`.
    ///
    /// An explicit `--config` must load. Otherwise a missing file means
    /// defaults, while a file that exists but is invalid is an error.
    pub fn load_config(&self, cwd: &Path) -> Result<(Config, Option<PathBuf>), LogbookError> {
        if let Some(path) = &self.config {
            let config = load_config(path)?;
            return Ok((config, Some(path.clone())));
        }

        load_config_or_default(cwd)
    }

    /// Resolve the output format, the flag taking precedence over config
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        match self.format {
            Some(format) => format,
            None if config.output.format.eq_ignore_ascii_case("json") => OutputFormat::Json,
            None => OutputFormat::Text,
        }
    }
}
