//! Async character API client
//!
//! One-shot JSON GETs against the character endpoint with cancellation
//! support. Uses reqwest for HTTP and tokio for the async runtime.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use super::types::{Character, CharacterPage};

/// Errors that can occur while fetching characters
///
/// The UI renders these uniformly as a single error message string; the
/// variants exist so tests and logs can tell the failure modes apart.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// API returned a non-2xx status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request was cancelled by a newer query
    #[error("Request cancelled")]
    Cancelled,
}

/// Async character API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Fetch the characters matching `name`
    ///
    /// The name filter is sent exactly as typed; reqwest handles URL encoding
    /// of the query parameter. An empty name yields the API's default page.
    ///
    /// Races the request against the cancellation token with `tokio::select!`
    /// so a superseded query aborts its HTTP call instead of running to
    /// completion.
    pub async fn fetch_characters(
        &self,
        name: &str,
        cancel_token: &CancellationToken,
    ) -> Result<Vec<Character>, ApiError> {
        if cancel_token.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let request = self.client.get(&self.base_url).query(&[("name", name)]);

        let response = tokio::select! {
            biased;

            _ = cancel_token.cancelled() => return Err(ApiError::Cancelled),
            response = request.send() => {
                response.map_err(|e| ApiError::Network(e.to_string()))?
            }
        };

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Api { code, message });
        }

        let page = tokio::select! {
            biased;

            _ = cancel_token.cancelled() => return Err(ApiError::Cancelled),
            body = response.json::<CharacterPage>() => {
                body.map_err(|e| ApiError::Parse(e.to_string()))?
            }
        };

        Ok(page.results)
    }
}
