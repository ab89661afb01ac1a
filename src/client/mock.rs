//! Mock catalog client for testing
//!
//! Provides a mock implementation of [`CatalogApi`] for unit testing
//! without making real HTTP calls.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{CatalogApi, OrganizationResponse};
use crate::error::{ApiError, Result};

/// Mock catalog client.
///
/// # Example
/// ```ignore
/// let mock = MockCatalogClient::new()
///     .with_response(success_response(vec![record("Auswärtiges Amt", 20)]))
///     .await;
///
/// let response = mock.list_organizations().await?;
/// assert_eq!(mock.call_count().await, 1);
/// ```
#[derive(Default)]
pub struct MockCatalogClient {
    /// Response to return from list_organizations
    response: Arc<Mutex<Option<OrganizationResponse>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Number of list_organizations calls
    calls: Arc<Mutex<usize>>,
}

impl MockCatalogClient {
    /// Create a mock that answers with an empty successful listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the response returned by list_organizations.
    pub async fn with_response(self, response: OrganizationResponse) -> Self {
        *self.response.lock().await = Some(response);
        self
    }

    /// Configure an error to return on the next call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Number of list_organizations calls made so far.
    pub async fn call_count(&self) -> usize {
        *self.calls.lock().await
    }
}

#[async_trait]
impl CatalogApi for MockCatalogClient {
    async fn list_organizations(&self) -> Result<OrganizationResponse> {
        *self.calls.lock().await += 1;

        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }

        Ok(self
            .response
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| OrganizationResponse {
                success: true,
                result: Some(Vec::new()),
                error: None,
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{record, success_response};
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_default_is_empty_success() {
        let mock = MockCatalogClient::new();

        let response = mock.list_organizations().await.unwrap();

        assert!(response.success);
        assert_eq!(response.result, Some(Vec::new()));
        assert_eq!(mock.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_mock_with_response() {
        let mock = MockCatalogClient::new()
            .with_response(success_response(vec![record("Auswärtiges Amt", 20)]))
            .await;

        let records = mock.list_organizations().await.unwrap().into_records().unwrap();

        assert_eq!(records, vec![record("Auswärtiges Amt", 20)]);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockCatalogClient::new()
            .with_error(ApiError::Network("Connection refused".to_string()))
            .await;

        let first = mock.list_organizations().await;
        assert!(matches!(first, Err(Error::Api(ApiError::Network(_)))));

        let second = mock.list_organizations().await;
        assert!(second.is_ok());
        assert_eq!(mock.call_count().await, 2);
    }
}
