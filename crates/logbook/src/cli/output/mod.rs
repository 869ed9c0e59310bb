//! Terminal output helpers

use console::{style, Style};

/// `✓ message` on stdout
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// `✗ message` on stderr
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// `! message` on stderr, keeping stdout clean for piped output
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Bold section title
pub fn header(text: &str) -> String {
    style(text).bold().to_string()
}

/// Indented `key: value` line with a dimmed key
pub fn key_value(key: &str, value: &str) -> String {
    format!("  {}: {}", style(key).dim(), value)
}

pub fn category_style() -> Style {
    Style::new().green().bold()
}

pub fn hash_style() -> Style {
    Style::new().yellow()
}

pub fn path_style() -> Style {
    Style::new().cyan()
}
