//! Dataset counts per federal ministry
//!
//! Combines the catalog's organization listing with the department hierarchy:
//! organizations outside the hierarchy are dropped, subordinates are folded
//! into their department, every department appears at least with a zero
//! count, and the result is sorted by dataset count, highest first.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::{CatalogApi, OrganizationRecord};
use crate::error::Result;
use crate::hierarchy::DepartmentResolver;

/// Published dataset count for one department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentReport {
    pub name: String,
    pub dataset_count: u64,
}

impl DepartmentReport {
    pub fn new(name: impl Into<String>, dataset_count: u64) -> Self {
        Self {
            name: name.into(),
            dataset_count,
        }
    }

    /// A report with no datasets
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::new(name, 0)
    }
}

/// Totals over a finished report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub department_count: usize,
    pub dataset_count: u64,
}

impl DashboardSummary {
    pub fn of(reports: &[DepartmentReport]) -> Self {
        Self {
            department_count: reports.len(),
            dataset_count: reports.iter().map(|r| r.dataset_count).sum(),
        }
    }
}

/// Computes department dataset counts from a catalog and a hierarchy
pub struct DashboardService<C> {
    client: C,
    resolver: Arc<DepartmentResolver>,
}

impl<C: CatalogApi> DashboardService<C> {
    pub fn new(client: C, resolver: Arc<DepartmentResolver>) -> Self {
        Self { client, resolver }
    }

    /// Fetch the organization listing and aggregate it per department.
    ///
    /// A hierarchy load failure is returned before any request is made.
    pub async fn compute_department_counts(&self) -> Result<Vec<DepartmentReport>> {
        let result = self.fetch_and_aggregate().await;
        if let Err(e) = &result {
            log::debug!("Dashboard computation failed: {}", e);
        }
        result
    }

    async fn fetch_and_aggregate(&self) -> Result<Vec<DepartmentReport>> {
        self.resolver.check()?;

        let response = self.client.list_organizations().await?;
        let records = response.into_records()?;
        log::debug!("Catalog listed {} organizations", records.len());

        let reports = aggregate(records, &self.resolver);
        log::debug!("Aggregated {} departments", reports.len());

        Ok(reports)
    }
}

/// Fold organization records into one report per department.
///
/// Ties in the descending sort keep first-seen order: departments reached
/// through catalog records come before zero-count placeholders.
pub fn aggregate(
    records: Vec<OrganizationRecord>,
    resolver: &DepartmentResolver,
) -> Vec<DepartmentReport> {
    let matched = records
        .into_iter()
        .filter(|org| resolver.is_known(&org.display_name))
        .map(|org| {
            DepartmentReport::new(
                resolver.resolve_department(&org.display_name),
                org.package_count,
            )
        });

    let placeholders = resolver
        .department_names()
        .iter()
        .map(DepartmentReport::placeholder);

    let mut reports = combine_duplicates(matched.chain(placeholders));
    reports.sort_by(|a, b| b.dataset_count.cmp(&a.dataset_count));
    reports
}

/// Sum dataset counts of reports sharing a name, keeping first-seen order.
fn combine_duplicates(reports: impl IntoIterator<Item = DepartmentReport>) -> Vec<DepartmentReport> {
    let mut combined: Vec<DepartmentReport> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for report in reports {
        match positions.get(&report.name) {
            Some(&idx) => combined[idx].dataset_count += report.dataset_count,
            None => {
                positions.insert(report.name.clone(), combined.len());
                combined.push(report);
            }
        }
    }

    combined
}
