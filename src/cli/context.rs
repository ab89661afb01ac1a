//! Command execution context
//!
//! Loads the configuration, applies runtime overrides, resolves the output
//! format and loads the department hierarchy once per process.

use std::sync::Arc;

use clap::ValueEnum;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::CkanClient;
use crate::config::Config;
use crate::dashboard::DashboardService;
use crate::error::{ConfigError, Result};
use crate::hierarchy::{DepartmentResolver, HierarchySource};

/// Context for command execution containing config, hierarchy, and runtime options.
pub struct CommandContext {
    /// Configuration with CLI/env overrides applied
    pub config: Config,
    /// Department hierarchy, shared read-only with the dashboard service
    pub resolver: Arc<DepartmentResolver>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A hierarchy that fails to load does not fail the context; the failure
    /// is recorded in the resolver and surfaces when it is used.
    ///
    /// # Errors
    /// Returns error if the config cannot be loaded or is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?
            .with_overrides(opts.api_url_ref(), opts.departments_file_ref());
        config.validate()?;

        let format = resolve_format(opts.format, &config)?;
        let source = HierarchySource::new(config.departments_file.clone());
        let resolver = Arc::new(DepartmentResolver::initialize(&source));

        Ok(Self {
            config,
            resolver,
            format,
        })
    }

    /// Build the dashboard service against the configured catalog API.
    pub fn dashboard_service(&self) -> Result<DashboardService<CkanClient>> {
        let client = CkanClient::from_config(&self.config)?;
        Ok(DashboardService::new(client, Arc::clone(&self.resolver)))
    }
}

/// Pick the output format: CLI/env first, then the config preference.
fn resolve_format(requested: Option<OutputFormat>, config: &Config) -> Result<OutputFormat> {
    if let Some(format) = requested {
        return Ok(format);
    }

    match config.preferences.format.as_deref() {
        Some(name) => <OutputFormat as ValueEnum>::from_str(name, true).map_err(|_| {
            ConfigError::Invalid(format!(
                "Unknown output format '{}' (expected pretty, table, json or html)",
                name
            ))
            .into()
        }),
        None => Ok(OutputFormat::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preferences;
    use tempfile::tempdir;

    fn config_with_format(format: Option<&str>) -> Config {
        Config {
            preferences: Preferences {
                format: format.map(str::to_string),
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_format_cli_wins_over_config() {
        let config = config_with_format(Some("json"));
        let format = resolve_format(Some(OutputFormat::Table), &config).unwrap();
        assert_eq!(format, OutputFormat::Table);
    }

    #[test]
    fn test_format_from_config_ignores_case() {
        let config = config_with_format(Some("HTML"));
        assert_eq!(resolve_format(None, &config).unwrap(), OutputFormat::Html);
    }

    #[test]
    fn test_format_defaults_to_pretty() {
        let config = config_with_format(None);
        assert_eq!(resolve_format(None, &config).unwrap(), OutputFormat::Pretty);
    }

    #[test]
    fn test_unknown_config_format_is_invalid() {
        let config = config_with_format(Some("xml"));
        let err = resolve_format(None, &config).unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_context_applies_overrides_and_loads_hierarchy() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "api_url: https://example.org/api/3/action\n").unwrap();

        let opts = GlobalOptions {
            format: None,
            config: Some(config_path.to_string_lossy().into_owned()),
            api_url: Some("http://127.0.0.1:9/api".to_string()),
            departments_file: Some(
                concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/departments_valid.json")
                    .to_string(),
            ),
        };

        let ctx = CommandContext::new(&opts).unwrap();

        assert_eq!(ctx.config.api_url, "http://127.0.0.1:9/api");
        assert_eq!(ctx.resolver.department_names().len(), 2);
        assert!(ctx.dashboard_service().is_ok());
    }

    #[test]
    fn test_context_keeps_hierarchy_failure() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "departments_file: /no/such/file.json\n").unwrap();

        let opts = GlobalOptions {
            config: Some(config_path.to_string_lossy().into_owned()),
            ..GlobalOptions::default()
        };

        let ctx = CommandContext::new(&opts).unwrap();

        assert!(ctx.resolver.failure().is_some());
    }
}
