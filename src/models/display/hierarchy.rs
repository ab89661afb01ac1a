//! Hierarchy display models

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::hierarchy::{Department, DepartmentResolver};
use crate::output::{Formattable, html, json, table};

/// Department row with its number of subordinates
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct HierarchyDisplay {
    #[tabled(rename = "DEPARTMENT")]
    pub name: String,

    #[tabled(rename = "SUBORDINATES")]
    pub subordinates: usize,
}

impl From<&Department> for HierarchyDisplay {
    fn from(department: &Department) -> Self {
        Self {
            name: department.name.clone(),
            subordinates: department.subordinates.len(),
        }
    }
}

/// One subordinate organization and its department
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SubordinateDisplay {
    #[tabled(rename = "DEPARTMENT")]
    pub department: String,

    #[tabled(rename = "SUBORDINATE")]
    pub name: String,
}

impl SubordinateDisplay {
    /// Flatten departments into one row per subordinate
    pub fn flatten(departments: &[Department]) -> Vec<Self> {
        departments
            .iter()
            .flat_map(|d| {
                d.subordinates.iter().map(|s| Self {
                    department: d.name.clone(),
                    name: s.name.clone(),
                })
            })
            .collect()
    }
}

/// How an organization name relates to the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationRole {
    Department,
    Subordinate,
    Unknown,
}

impl std::fmt::Display for OrganizationRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrganizationRole::Department => "department",
            OrganizationRole::Subordinate => "subordinate",
            OrganizationRole::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Result of resolving one organization name
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionView {
    pub name: String,
    pub role: OrganizationRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Tabled)]
struct ResolutionRow {
    #[tabled(rename = "ORGANIZATION")]
    name: String,
    #[tabled(rename = "ROLE")]
    role: String,
    #[tabled(rename = "DEPARTMENT")]
    department: String,
}

impl ResolutionView {
    pub fn resolve(resolver: &DepartmentResolver, name: &str) -> Self {
        let department = resolver.resolve_department(name);
        let role = if department != name {
            OrganizationRole::Subordinate
        } else if resolver.is_known(name) {
            OrganizationRole::Department
        } else {
            OrganizationRole::Unknown
        };

        Self {
            name: name.to_string(),
            role,
            department: (role != OrganizationRole::Unknown).then(|| department.to_string()),
        }
    }

    fn row(&self) -> ResolutionRow {
        ResolutionRow {
            name: self.name.clone(),
            role: self.role.to_string(),
            department: self.department.clone().unwrap_or_else(|| "-".to_string()),
        }
    }

    fn format_pretty(&self) -> String {
        match (&self.role, &self.department) {
            (OrganizationRole::Subordinate, Some(department)) => format!(
                "{} {} → {}",
                "✓".green(),
                self.name.bold(),
                department
            ),
            (OrganizationRole::Department, _) => {
                format!("{} {} is a department", "✓".green(), self.name.bold())
            }
            _ => format!(
                "{} {} is not part of the department hierarchy",
                "✗".red(),
                self.name.bold()
            ),
        }
    }
}

impl Formattable for ResolutionView {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(self.format_pretty()),
            OutputFormat::Table => Ok(table::format_table(&[self.row()])),
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Html => Ok(html::render_page(
                "Organization lookup",
                &html::format_html_table(&[self.row()]),
            )),
        }
    }
}
