//! CKAN catalog API client

use async_trait::async_trait;

use crate::error::Result;

pub mod ckan;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use ckan::CkanClient;
#[cfg(test)]
pub use mock::MockCatalogClient;
pub use models::{CatalogError, OrganizationRecord, OrganizationResponse};

/// Read access to an open-data catalog
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch all organizations with their full record details
    async fn list_organizations(&self) -> Result<OrganizationResponse>;
}
