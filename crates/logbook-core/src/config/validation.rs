//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_parse(config)?;
    validate_git(config)?;
    validate_team(config)?;
    validate_output(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_parse(config: &Config) -> Result<()> {
    if config.parse.max_commits == Some(0) {
        return Err(ConfigError::InvalidValue {
            field: "parse.max_commits".to_string(),
            message: "must be greater than zero".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_git(config: &Config) -> Result<()> {
    if config.git.remote.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "git.remote".to_string(),
            message: "remote cannot be empty".to_string(),
        }
        .into());
    }

    if let Some(pattern) = &config.git.tag_pattern {
        if pattern.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "git.tag_pattern".to_string(),
                message: "pattern cannot be empty".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_team(config: &Config) -> Result<()> {
    let entries = config
        .team
        .maintainers
        .iter()
        .map(|m| ("team.maintainers", m))
        .chain(config.team.bots.iter().map(|b| ("team.bots", b)));

    for (i, (field, entry)) in entries.enumerate() {
        if entry.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: format!("entry {} cannot be empty", i),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_output(config: &Config) -> Result<()> {
    let valid_formats = ["text", "json"];
    if !valid_formats.contains(&config.output.format.as_str()) {
        return Err(ConfigError::InvalidValue {
            field: "output.format".to_string(),
            message: format!("must be one of: {}", valid_formats.join(", ")),
        }
        .into());
    }

    Ok(())
}
