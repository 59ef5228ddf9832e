use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::config::DashboardConfig;

/// API error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// API client for the freshness backend, bound to one device
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    device_id: String,
}

impl ApiClient {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            base_url: config.api_url.clone(),
            device_id: config.device_id.clone(),
        }
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Absolute (or origin-relative) URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request and deserialize the response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path)).send().await?;

        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Make a POST request without a body; the response body is ignored
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = Request::post(&self.url(path)).send().await?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// Make a POST request with a JSON body; only the status is checked
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// Turn non-success statuses into [`ApiError::Http`]
    async fn check_status(
        response: gloo_net::http::Response,
    ) -> Result<gloo_net::http::Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::Http { status, message })
    }
}
