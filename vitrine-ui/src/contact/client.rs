//! HTTP client for the contact relay endpoint.

use async_trait::async_trait;
use thiserror::Error;
use vitrine_model::{ContactSubmission, RelayResponse};

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum RelayClientError {
    /// The relay was unreachable or returned an unreadable body.
    #[error("relay request failed")]
    Http(#[from] reqwest::Error),
}

/// Boundary to the relay endpoint. The production implementation posts
/// JSON over HTTP; tests substitute a mock.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Submit the form. Relay-level failures (validation, transport)
    /// arrive as an `Ok` response with `success: false`; `Err` means the
    /// relay could not be reached at all.
    async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<RelayResponse, RelayClientError>;
}

/// Production relay client posting to the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpRelayClient {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpRelayClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<RelayResponse, RelayClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&submission)
            .send()
            .await?;
        // The relay answers with the same JSON shape on every status
        // code, so the body is decoded regardless of success.
        let reply = response.json::<RelayResponse>().await?;
        Ok(reply)
    }
}
