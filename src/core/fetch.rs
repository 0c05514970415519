//! Public key retrieval over HTTP.
//!
//! One unauthenticated GET per call. No retry and no timeout: a failure is
//! reported once with the status code or transport message.

use tracing::debug;

use crate::error::FetchError;

/// HTTP client for armored key downloads.
#[derive(Debug, Clone, Default)]
pub struct KeyFetcher {
    client: reqwest::Client,
}

impl KeyFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the response body at `url` as text.
    ///
    /// # Errors
    ///
    /// `FetchError::Status` for a non-2xx response, `FetchError::Network`
    /// when the request cannot be made or the body cannot be read.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching key");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "key fetch rejected");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!(body_len = body.len(), "key fetched");
        Ok(body)
    }
}
