//! Parse command

use std::fmt::Write as _;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, info, instrument};

use logbook_core::Config;
use logbook_git::{git_log_dump, GitRepo};
use logbook_gitlog::{parse_log, LogRange, ParseOptions, ParseResult};

use crate::cli::{output, Cli, OutputFormat};
use crate::team::TeamRoster;

/// Parse commit history into categorized commits
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Start after this tag or revision (defaults to the latest tag)
    #[arg(long)]
    pub since: Option<String>,

    /// End at this tag or revision (defaults to HEAD)
    #[arg(long)]
    pub until: Option<String>,

    /// Maximum number of commits
    #[arg(short = 'n', long = "max-count")]
    pub count: Option<usize>,

    /// Read a log dump from a file instead of running git (`-` for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Omit per-commit file paths
    #[arg(long)]
    pub no_files: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ParseCommand {
    /// Execute the parse command
    #[instrument(skip_all, fields(since = ?self.since, until = ?self.until))]
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let (config, config_path) = cli.load_config(&cwd)?;
        debug!(config = ?config_path, "using configuration");

        let options = ParseOptions::default()
            .with_files(config.parse.include_files && !self.no_files);
        let count = self.count.or(config.parse.max_commits);

        let (text, repository, range) = match &self.input {
            Some(input) => {
                let range = LogRange::new(self.since.clone(), self.until.clone(), count);
                (read_input(input)?, None, range)
            }
            None => self.dump_from_git(&cwd, &config, count)?,
        };

        let mut commits = parse_log(&text, &options);
        if let Some(count) = count {
            commits.truncate(count);
        }

        let roster = TeamRoster::from_config(&config.team);
        let result = build_result(repository, range, commits, &roster);
        info!(
            commit_count = result.summary().total_commits,
            contributors = result.contributors().len(),
            "parsed history"
        );

        let rendered = match cli.output_format(&config) {
            OutputFormat::Json if config.output.pretty => result.to_json_pretty()?,
            OutputFormat::Json => result.to_json()?,
            OutputFormat::Text => render_text(&result),
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, console::strip_ansi_codes(&rendered).as_bytes())?;
                if !cli.quiet {
                    output::success(&format!(
                        "Wrote {} commits to {}",
                        result.summary().total_commits,
                        output::path_style().apply_to(path.display())
                    ));
                }
            }
            None => println!("{}", rendered),
        }

        Ok(())
    }

    fn dump_from_git(
        &self,
        cwd: &Path,
        config: &Config,
        count: Option<usize>,
    ) -> anyhow::Result<(String, Option<String>, LogRange)> {
        let repo = GitRepo::discover(cwd)?;

        let since = match &self.since {
            Some(since) => Some(since.clone()),
            None => repo
                .find_latest_tag(config.git.tag_pattern.as_deref())?
                .map(|tag| tag.name),
        };
        let range = LogRange::new(since, self.until.clone(), count);
        debug!(revisions = ?range.revision_spec(), "resolved range");

        let repository = repo.repository_id(&config.git.remote)?;
        if !repo.has_commits() {
            debug!("repository has no commits yet");
            return Ok((String::new(), repository, range));
        }

        let text = git_log_dump(repo.path(), &range)?;
        Ok((text, repository, range))
    }
}

fn read_input(input: &Path) -> std::io::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(input)
}

/// Aggregate commits, flag external authors and rank contributors
fn build_result(
    repository: Option<String>,
    range: LogRange,
    commits: Vec<logbook_gitlog::Commit>,
    roster: &TeamRoster,
) -> ParseResult {
    let mut result = ParseResult::from_commits(repository, range, commits);
    if !roster.is_empty() {
        result.mark_external(|c| roster.is_external(&c.author, &c.email));
    }
    result.compute_contributors();
    result
}

fn render_text(result: &ParseResult) -> String {
    let summary = result.summary();
    let range = result.range();
    let mut out = String::new();

    let _ = writeln!(out, "{}", output::header("Commit history"));
    if let Some(repository) = result.repository() {
        let _ = writeln!(out, "{}", output::key_value("Repository", repository));
    }
    let _ = writeln!(
        out,
        "{}",
        output::key_value(
            "Range",
            &range.revision_spec().unwrap_or_else(|| "HEAD".to_string())
        )
    );
    let _ = writeln!(out, "{}", output::key_value("Commits", &summary.total_commits.to_string()));
    let _ = writeln!(
        out,
        "{}",
        output::key_value(
            "Changes",
            &format!(
                "{} files, +{} -{}",
                summary.files_changed, summary.insertions, summary.deletions
            )
        )
    );
    if summary.breaking_changes > 0 {
        let _ = writeln!(
            out,
            "{}",
            output::key_value("Breaking", &style(summary.breaking_changes).red().bold().to_string())
        );
    }

    if !summary.by_category.is_empty() || summary.uncategorized > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", output::header("Categories"));
        for (category, n) in &summary.by_category {
            let label = format!("{} ({})", category, category.tier());
            let _ = writeln!(out, "  {} {}", output::category_style().apply_to(format!("{:<28}", label)), n);
        }
        if summary.uncategorized > 0 {
            let _ = writeln!(out, "  {} {}", style(format!("{:<28}", "uncategorized")).dim(), summary.uncategorized);
        }
    }

    if !result.commits().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", output::header("Commits"));
        for commit in result.commits() {
            let category = commit
                .category
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string());
            let marker = if commit.breaking { "!" } else { " " };
            let _ = writeln!(
                out,
                "  {} {}{:<15} {}",
                output::hash_style().apply_to(&commit.short_hash),
                style(marker).red().bold(),
                category,
                commit.description
            );
        }
    }

    if !result.contributors().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", output::header("Contributors"));
        for contributor in result.contributors() {
            let external = if contributor.is_external {
                style(" (external)").cyan().to_string()
            } else {
                String::new()
            };
            let _ = writeln!(
                out,
                "  {} {}{}",
                contributor.commit_count, contributor.name, external
            );
        }
    }

    out.trim_end().to_string()
}
