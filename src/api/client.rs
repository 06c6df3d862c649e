//! HTTP client for the dashboard API.
//!
//! This module provides a low-level HTTP client wrapper for talking to the
//! dashboard's internal API, handling the base URL, optional bearer
//! authentication, and response decoding.

use super::error::ApiError;
use serde::de::DeserializeOwned;

/// Makes requests against the dashboard API and decodes JSON responses.
///
pub(crate) struct Client {
    base_url: String,
    api_token: Option<String>,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL and optional token.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest::Client::builder().build() only fails on
    /// invalid configuration, which we don't use.
    pub fn new(base_url: &str, api_token: Option<&str>) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_token: api_token.map(|t| t.to_owned()),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// GET a JSON endpoint relative to the base URL and decode the body.
    ///
    /// Query parameters go through reqwest's encoder because values such as
    /// feed URLs contain reserved characters.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut request = self.http_client.get(&url).query(params);
        if let Some(token) = &self.api_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            log::error!("API request to {} failed with status {}", url, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            let body = String::from_utf8_lossy(&bytes);
            log::error!(
                "Failed to decode API response from {}: {}. Response body: {}",
                url,
                e,
                body
            );
            ApiError::Decode(e.to_string())
        })
    }

    /// GET an absolute URL and report the response status code without
    /// reading the body. Used by the app status checker.
    ///
    pub async fn get_status(&self, url: &str) -> Result<u16, ApiError> {
        let response = self.http_client.get(url).send().await?;
        Ok(response.status().as_u16())
    }
}
