//! CKAN action API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{CatalogApi, CatalogError, OrganizationResponse};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Action listing all organizations
const ORGANIZATION_LIST: &str = "organization_list";

/// CKAN action API client
pub struct CkanClient {
    http: HttpClient,
    base_url: String,
}

impl CkanClient {
    /// Create a client for the action API at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("govdash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the resolved configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_url.clone(), config.timeout())
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn action_url(&self, action: &str) -> String {
        format!("{}/{}", self.base_url, action)
    }

    /// Call a GET action and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, action: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.action_url(action);
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to read response: {}", e))
            })?;
            let data = serde_json::from_str::<T>(&body).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse {} response: {}", action, e))
            })?;
            return Ok(data);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| status.to_string());

        match status {
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden(message).into()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(message).into()),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(ApiError::BadRequest(message).into())
            }
            status if status.is_server_error() => Err(ApiError::ServerError(message).into()),
            status => Err(ApiError::UnexpectedStatus(status.as_u16()).into()),
        }
    }
}

/// Pull the message out of a CKAN error body, falling back to the raw text
fn error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorEnvelope {
        error: CatalogError,
    }

    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return Some(envelope.error.message);
    }

    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[async_trait]
impl CatalogApi for CkanClient {
    async fn list_organizations(&self) -> Result<OrganizationResponse> {
        self.get(ORGANIZATION_LIST, &[("all_fields", "true")]).await
    }
}
