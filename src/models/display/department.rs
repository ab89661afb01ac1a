//! Dashboard display models

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::dashboard::{DashboardSummary, DepartmentReport};
use crate::error::Result;
use crate::output::{Formattable, html, json, table};

/// Width of the longest bar in the pretty view
const BAR_WIDTH: usize = 30;

const DASHBOARD_TITLE: &str = "Datasets by federal ministry";

/// One ranked department row for table and HTML output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DepartmentDisplay {
    #[tabled(rename = "#")]
    pub rank: usize,

    #[tabled(rename = "DEPARTMENT")]
    pub name: String,

    #[tabled(rename = "DATASETS")]
    pub dataset_count: u64,
}

impl DepartmentDisplay {
    /// Number rows starting at 1 in report order
    pub fn ranked(reports: &[DepartmentReport]) -> Vec<Self> {
        reports
            .iter()
            .enumerate()
            .map(|(i, report)| Self {
                rank: i + 1,
                name: report.name.clone(),
                dataset_count: report.dataset_count,
            })
            .collect()
    }
}

/// A finished dashboard ready to render
#[derive(Debug, Clone)]
pub struct DashboardView {
    reports: Vec<DepartmentReport>,
    summary: DashboardSummary,
    source: String,
}

impl DashboardView {
    pub fn new(reports: Vec<DepartmentReport>, source: impl Into<String>) -> Self {
        let summary = DashboardSummary::of(&reports);
        Self {
            reports,
            summary,
            source: source.into(),
        }
    }

    fn format_pretty(&self) -> String {
        if self.reports.is_empty() {
            return "No departments found.".to_string();
        }

        let max = self
            .reports
            .iter()
            .map(|r| r.dataset_count)
            .max()
            .unwrap_or(0);
        let name_width = self
            .reports
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(0);
        let count_width = max.to_string().len();

        let mut lines = vec![DASHBOARD_TITLE.bold().to_string(), String::new()];
        for (i, report) in self.reports.iter().enumerate() {
            let bar = "█".repeat(bar_length(report.dataset_count, max));
            let padding = name_width - report.name.chars().count();
            lines.push(format!(
                "{:>3}. {}{}  {:>count_width$}  {}",
                i + 1,
                report.name,
                " ".repeat(padding),
                report.dataset_count,
                bar.cyan(),
            ));
        }
        lines.push(String::new());
        lines.push(
            format!(
                "{} datasets across {} departments",
                self.summary.dataset_count, self.summary.department_count
            )
            .dimmed()
            .to_string(),
        );

        lines.join("\n")
    }

    fn format_html(&self) -> String {
        let body = format!(
            "<p>{} datasets across {} departments, source: {}</p>\n{}",
            self.summary.dataset_count,
            self.summary.department_count,
            html::escape(&self.source),
            html::format_html_table(&DepartmentDisplay::ranked(&self.reports)),
        );
        html::render_page(DASHBOARD_TITLE, &body)
    }
}

/// Scale `count` to a bar of at most [`BAR_WIDTH`] cells; non-zero counts
/// always get at least one cell.
fn bar_length(count: u64, max: u64) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    let scaled = (count as u128 * BAR_WIDTH as u128 / max as u128) as usize;
    scaled.max(1)
}

impl Formattable for DashboardView {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(self.format_pretty()),
            OutputFormat::Table => Ok(table::format_table(&DepartmentDisplay::ranked(
                &self.reports,
            ))),
            OutputFormat::Json => Ok(json::format_json_from(&self.reports, &self.source)?),
            OutputFormat::Html => Ok(self.format_html()),
        }
    }
}
