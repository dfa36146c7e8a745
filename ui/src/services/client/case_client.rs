use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::errors::LookupError;
use super::types::{CaseQuery, CaseResult, WelcomeResponse};
use crate::services::config::LookupConfig;

/// Anything that can answer a case lookup.
#[async_trait(?Send)] // Browser futures are not Send
pub trait CaseLookupBackend {
    /// Look up one case. Exactly one request per call, no retries.
    async fn fetch_case(&self, query: &CaseQuery) -> Result<CaseResult, LookupError>;

    /// Check that the backend is up, returning its welcome message
    async fn ping(&self) -> Result<String, LookupError>;
}

/// HTTP client for the case lookup backend
#[derive(Clone)]
pub struct CaseClient {
    http_client: Client,
    config: LookupConfig,
}

impl CaseClient {
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| LookupError::Client {
                message: e.to_string(),
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }
}

#[async_trait(?Send)]
impl CaseLookupBackend for CaseClient {
    #[instrument(skip(self), err)]
    async fn fetch_case(&self, query: &CaseQuery) -> Result<CaseResult, LookupError> {
        let url = self.config.fetch_case_url();
        info!("Fetching case from {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(query)
            .send()
            .await
            .map_err(|e| LookupError::Network {
                message: format!("Failed to call {}: {}", url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body still counts as a server response
            let body = response.text().await.unwrap_or_default();
            warn!("Case lookup failed with status {}", status);
            return Err(LookupError::from_error_body(status.as_u16(), &body));
        }

        let result: CaseResult = response
            .json()
            .await
            .map_err(|e| LookupError::InvalidResponse {
                message: e.to_string(),
            })?;

        info!(
            "Case found: {} ({} orders)",
            result.party_names,
            result.orders.len()
        );
        Ok(result)
    }

    #[instrument(skip(self), err)]
    async fn ping(&self) -> Result<String, LookupError> {
        let url = self.config.root_url();

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Network {
                message: format!("Failed to reach {}: {}", url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::from_error_body(status.as_u16(), &body));
        }

        let welcome: WelcomeResponse =
            response
                .json()
                .await
                .map_err(|e| LookupError::InvalidResponse {
                    message: e.to_string(),
                })?;

        Ok(welcome.message)
    }
}
