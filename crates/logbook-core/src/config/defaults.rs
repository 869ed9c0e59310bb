//! Default configuration values

use super::types::Config;

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "logbook.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "logbook.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".logbook.toml",
        ".logbook.yaml",
    ]
}

/// Generate default configuration TOML
pub fn default_config_toml() -> String {
    let config = Config::default();
    toml::to_string_pretty(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# logbook configuration

[parse]
include_files = true

[git]
remote = "origin"

[team]
maintainers = []
bots = []

[output]
format = "text"
pretty = true
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_default() {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_generated_toml_parses() {
        let config: Config = toml::from_str(&default_config_toml()).unwrap();
        assert_eq!(config, Config::default());
    }
}
