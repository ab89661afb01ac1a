//! Test fixtures for catalog responses and department hierarchies
//!
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::{CatalogError, OrganizationRecord, OrganizationResponse};
use crate::hierarchy::{DepartmentResolver, parse_departments};

/// Two departments: "Auswärtiges Amt" and "Bundesministerium der Justiz"
/// (with "Bundesamt für Justiz" and "Deutsches Patent- und Markenamt").
pub const DEPARTMENTS_VALID_JSON: &str = include_str!("../../tests/fixtures/departments_valid.json");

/// A hierarchy file without a `departments` key
pub const DEPARTMENTS_INVALID_JSON: &str =
    include_str!("../../tests/fixtures/departments_invalid.json");

/// Auswärtiges Amt (20), both Justice subordinates (10 + 5), one unknown organization
pub const ORGANIZATIONS_VALID_JSON: &str =
    include_str!("../../tests/fixtures/organizations_valid.json");

/// `success: false` with a "Not found" error
pub const ORGANIZATIONS_INVALID_JSON: &str =
    include_str!("../../tests/fixtures/organizations_invalid.json");

/// Build an organization record.
pub fn record(display_name: impl Into<String>, package_count: u64) -> OrganizationRecord {
    OrganizationRecord {
        display_name: display_name.into(),
        package_count,
    }
}

/// Build a successful response envelope.
pub fn success_response(records: Vec<OrganizationRecord>) -> OrganizationResponse {
    OrganizationResponse {
        success: true,
        result: Some(records),
        error: None,
    }
}

/// Build an unsuccessful response envelope.
pub fn failure_response(message: impl Into<String>) -> OrganizationResponse {
    OrganizationResponse {
        success: false,
        result: None,
        error: Some(CatalogError {
            message: message.into(),
            kind: None,
        }),
    }
}

/// Parse the valid organizations fixture.
pub fn valid_organizations() -> OrganizationResponse {
    serde_json::from_str(ORGANIZATIONS_VALID_JSON).expect("valid organizations fixture")
}

/// Resolver loaded from the two-department fixture.
pub fn valid_resolver() -> DepartmentResolver {
    let departments =
        parse_departments("departments_valid.json", DEPARTMENTS_VALID_JSON).expect("valid fixture");
    DepartmentResolver::from_departments("departments_valid.json", departments)
}

/// Resolver whose load failed on the invalid fixture.
pub fn invalid_resolver() -> DepartmentResolver {
    let error = parse_departments("departments_invalid.json", DEPARTMENTS_INVALID_JSON)
        .expect_err("invalid fixture");
    DepartmentResolver::failed("departments_invalid.json", error)
}
