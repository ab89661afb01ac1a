//! CKAN catalog API data models

mod organization;

pub use organization::{CatalogError, OrganizationRecord, OrganizationResponse};
