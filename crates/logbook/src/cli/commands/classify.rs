//! Classify command

use clap::Args;
use console::style;
use tracing::{info, instrument};

use logbook_gitlog::{classify_message, CategorySuggestion};

use crate::cli::{output, Cli, OutputFormat};

/// Suggest a changelog category for a commit message
#[derive(Debug, Args)]
pub struct ClassifyCommand {
    /// Commit message (header, optionally followed by a body)
    pub message: String,
}

impl ClassifyCommand {
    /// Execute the classify command
    #[instrument(skip_all)]
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let (config, _) = cli.load_config(&cwd)?;

        let suggestion = classify_message(&self.message);
        info!(
            category = ?suggestion.as_ref().map(|s| s.category),
            confidence = suggestion.as_ref().map(|s| s.confidence),
            "classified message"
        );

        match cli.output_format(&config) {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "suggestion": suggestion,
                    "low_confidence": suggestion.as_ref().map_or(true, CategorySuggestion::is_low_confidence),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Text => print_text(suggestion.as_ref(), cli.quiet),
        }

        Ok(())
    }
}

fn print_text(suggestion: Option<&CategorySuggestion>, quiet: bool) {
    let Some(suggestion) = suggestion else {
        output::warning("Unknown conventional type; no category suggested");
        return;
    };

    if quiet {
        println!("{}", suggestion.category);
        return;
    }

    println!(
        "{}",
        output::key_value(
            "Category",
            &output::category_style()
                .apply_to(suggestion.category)
                .to_string()
        )
    );
    println!("{}", output::key_value("Tier", suggestion.tier.name()));
    println!(
        "{}",
        output::key_value("Confidence", &format!("{:.2}", suggestion.confidence))
    );
    println!("{}", output::key_value("Reasoning", &suggestion.reasoning));

    if suggestion.is_low_confidence() {
        output::warning(&format!(
            "Low confidence; {}",
            style("review before publishing").yellow()
        ));
    }
}
