//! Init command

use clap::Args;
use console::style;
use tracing::info;

use logbook_core::config::write_default_config;

use crate::cli::{output, Cli};

/// Write a default logbook.toml into the working directory
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, "executing init command");
        let cwd = std::env::current_dir()?;
        let config_path = write_default_config(&cwd, self.force)?;

        if !cli.quiet {
            output::success(&format!(
                "Created configuration at {}",
                output::path_style().apply_to(config_path.display())
            ));
            println!();
            println!("Next steps:");
            println!(
                "  1. List maintainers and bots under [team] in {}",
                config_path.display()
            );
            println!("  2. Run {} to parse history since the latest tag", style("logbook parse").cyan());
        }

        Ok(())
    }
}
