//! Status command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::hierarchy::{DepartmentResolver, HierarchySource};
use crate::output::{Formattable, html, json};

/// Configuration and hierarchy status
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub config_file: String,
    pub config_found: bool,
    pub api_url: String,
    pub departments_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub department_count: usize,
    pub subordinate_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusReport {
    fn collect(config_path: &std::path::Path, config: &Config, resolver: &DepartmentResolver) -> Self {
        let source = HierarchySource::new(config.departments_file.clone());

        Self {
            config_file: config_path.display().to_string(),
            config_found: config_path.is_file(),
            api_url: config.api_url.clone(),
            departments_file: resolver.resource().to_string(),
            location: source.locate().map(|l| l.to_string()),
            department_count: resolver.department_names().len(),
            subordinate_count: resolver.subordinate_count(),
            error: resolver.failure().map(|e| e.to_string()),
        }
    }

    fn format_pretty(&self) -> String {
        let mut lines = vec![format!("{}\n", "govdash Status".bold())];

        if self.config_found {
            lines.push(format!("Config file: {}", self.config_file.cyan()));
        } else {
            lines.push(format!(
                "Config file: {} {}",
                self.config_file.cyan(),
                "(not found, using defaults)".dimmed()
            ));
        }
        lines.push(format!("Catalog API: {}", self.api_url.cyan()));
        lines.push(String::new());

        match &self.location {
            Some(location) => lines.push(format!("{} Hierarchy resource: {}", "✓".green(), location)),
            None => lines.push(format!(
                "{} Hierarchy resource not found: {}",
                "✗".red(),
                self.departments_file
            )),
        }

        match &self.error {
            None => lines.push(format!(
                "{} Loaded {} departments ({} subordinates)",
                "✓".green(),
                self.department_count,
                self.subordinate_count
            )),
            Some(error) => {
                lines.push(format!("{} {}", "✗".red(), error));
                lines.push("  → Set departments_file in the config or pass --departments-file".to_string());
            }
        }

        lines.join("\n")
    }

    fn format_html(&self) -> String {
        let rows = [
            ("Config file", self.config_file.clone()),
            ("Catalog API", self.api_url.clone()),
            ("Hierarchy resource", self.location.clone().unwrap_or_else(|| "-".to_string())),
            ("Departments", self.department_count.to_string()),
            ("Subordinates", self.subordinate_count.to_string()),
            ("Error", self.error.clone().unwrap_or_else(|| "-".to_string())),
        ];

        let body: String = rows
            .iter()
            .map(|(label, value)| {
                format!("<dt>{}</dt><dd>{}</dd>\n", label, html::escape(value))
            })
            .collect();

        html::render_page("govdash status", &format!("<dl>\n{}</dl>", body))
    }
}

impl Formattable for StatusReport {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty | OutputFormat::Table => Ok(self.format_pretty()),
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Html => Ok(self.format_html()),
        }
    }
}

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let config_path = Config::resolve_path(opts.config_ref())?;

    StatusReport::collect(&config_path, &ctx.config, &ctx.resolver).print(ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures;
    use crate::error::HierarchyError;
    use std::path::Path;

    fn config() -> Config {
        Config {
            departments_file: "departments.json".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_status_reports_loaded_hierarchy() {
        colored::control::set_override(false);
        let report = StatusReport::collect(
            Path::new("/nonexistent/config.yaml"),
            &config(),
            &fixtures::valid_resolver(),
        );

        assert!(!report.config_found);
        assert_eq!(report.location.as_deref(), Some("bundled:departments.json"));
        assert_eq!(report.department_count, 2);
        assert_eq!(report.subordinate_count, 2);
        assert!(report.error.is_none());

        let text = report.format(OutputFormat::Pretty).unwrap();
        assert!(text.contains("Loaded 2 departments (2 subordinates)"));
        assert!(text.contains("not found, using defaults"));
    }

    #[test]
    fn test_status_reports_hierarchy_failure() {
        colored::control::set_override(false);
        let resolver = DepartmentResolver::failed(
            "missing.json",
            HierarchyError::NotFound {
                resource: "missing.json".to_string(),
            },
        );
        let config = Config {
            departments_file: "missing.json".to_string(),
            ..Config::default()
        };

        let report = StatusReport::collect(Path::new("/nonexistent/config.yaml"), &config, &resolver);

        assert!(report.location.is_none());
        assert_eq!(report.department_count, 0);
        let text = report.format(OutputFormat::Pretty).unwrap();
        assert!(text.contains("Hierarchy resource not found: missing.json"));
        assert!(text.contains("missing.json"));
    }

    #[test]
    fn test_status_json_shape() {
        let report = StatusReport::collect(
            Path::new("/nonexistent/config.yaml"),
            &config(),
            &fixtures::valid_resolver(),
        );

        let json = report.format(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["data"]["departmentCount"], 2);
        assert_eq!(value["data"]["configFound"], false);
        assert!(value["data"].get("error").is_none());
    }
}
