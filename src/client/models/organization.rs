//! Organization listing models

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// An organization as listed by the catalog's `organization_list` action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRecord {
    /// Human-readable organization name, matched against the hierarchy
    pub display_name: String,

    /// Number of published datasets (packages)
    pub package_count: u64,
}

/// Error payload of an unsuccessful catalog response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogError {
    pub message: String,

    /// CKAN error type, e.g. "Not Found Error"
    #[serde(default, rename = "__type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Response envelope of the `organization_list` action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationResponse {
    pub success: bool,

    /// Present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<OrganizationRecord>>,

    /// Present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CatalogError>,
}

impl OrganizationResponse {
    /// Unwrap the records of a successful response.
    ///
    /// `success: false` becomes [`ApiError::Unsuccessful`] carrying the
    /// catalog's error message.
    pub fn into_records(self) -> Result<Vec<OrganizationRecord>, ApiError> {
        if !self.success {
            let message = self
                .error
                .map(|e| e.message)
                .unwrap_or_else(|| "no error details provided".to_string());
            return Err(ApiError::Unsuccessful(message));
        }

        self.result.ok_or_else(|| {
            ApiError::InvalidResponse("successful response without \"result\"".to_string())
        })
    }
}
