//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.govdash/config.yaml)
    pub config: Option<String>,

    /// Catalog API base URL override
    pub api_url: Option<String>,

    /// Department hierarchy resource override
    pub departments_file: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            departments_file: cli.departments_file.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API URL override as `Option<&str>`.
    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Get hierarchy resource override as `Option<&str>`.
    pub fn departments_file_ref(&self) -> Option<&str> {
        self.departments_file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_global_options_from_cli() {
        let cli = Cli::parse_from([
            "govdash",
            "--format",
            "json",
            "--api-url",
            "http://localhost:8080",
            "--departments-file",
            "custom.json",
            "--config",
            "/custom/path",
            "status",
        ]);

        let opts = GlobalOptions::from_cli(&cli);

        assert_eq!(opts.format, Some(OutputFormat::Json));
        assert_eq!(opts.config_ref(), Some("/custom/path"));
        assert_eq!(opts.api_url_ref(), Some("http://localhost:8080"));
        assert_eq!(opts.departments_file_ref(), Some("custom.json"));
    }

    #[test]
    fn test_global_options_none_accessors() {
        let opts = GlobalOptions::default();

        assert_eq!(opts.format, None);
        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.api_url_ref(), None);
        assert_eq!(opts.departments_file_ref(), None);
    }
}
