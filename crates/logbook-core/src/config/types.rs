//! Configuration types

use serde::{Deserialize, Serialize};

/// Main configuration for logbook
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project name, used as the repository identifier when no remote exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Log parsing configuration
    pub parse: ParseConfig,

    /// Git configuration
    pub git: GitConfig,

    /// Team membership used to flag external contributors
    pub team: TeamConfig,

    /// Output configuration
    pub output: OutputConfig,
}

/// Log parsing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Whether to keep the list of changed file paths on each commit
    pub include_files: bool,

    /// Upper bound on commits read when no explicit count is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_commits: Option<usize>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            include_files: true,
            max_commits: None,
        }
    }
}

/// Git configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Remote used to derive the repository identifier
    pub remote: String,

    /// Regex restricting which tags count as release tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_pattern: Option<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            tag_pattern: None,
        }
    }
}

/// Team membership configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    /// Maintainer names or emails
    pub maintainers: Vec<String>,

    /// Bot names or emails
    pub bots: Vec<String>,
}

impl TeamConfig {
    /// Whether any team members are configured
    pub fn is_empty(&self) -> bool {
        self.maintainers.is_empty() && self.bots.is_empty()
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (text, json)
    pub format: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty: true,
        }
    }
}
