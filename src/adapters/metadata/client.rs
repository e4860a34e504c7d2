//! Token Metadata Client
//!
//! Fetches descriptive token metadata from the metadata HTTP API with an
//! optional bearer credential. One GET per lookup, no retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::types::TokenMetaResponse;
use crate::domain::TokenInfo;
use crate::ports::{MetadataError, MetadataPort};

/// Configuration for the metadata client
#[derive(Debug, Clone)]
pub struct MetadataConfig {
    /// Metadata API base URL
    pub api_url: String,
    /// Bearer credential, sent when present
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.solscan.io".to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the token metadata API
#[derive(Debug, Clone)]
pub struct MetadataClient {
    config: MetadataConfig,
    http: Client,
}

impl MetadataClient {
    pub fn new(config: MetadataConfig) -> Result<Self, MetadataError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MetadataError::Fetch(e.to_string()))?;
        Ok(Self { config, http })
    }

    fn meta_url(&self, mint: &str) -> String {
        format!(
            "{}/token/meta?address={}",
            self.config.api_url.trim_end_matches('/'),
            mint
        )
    }
}

#[async_trait]
impl MetadataPort for MetadataClient {
    async fn get_token_info(&self, mint: &str) -> Result<TokenInfo, MetadataError> {
        let mut request = self.http.get(self.meta_url(mint));
        if let Some(ref key) = self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| MetadataError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::Fetch(format!(
                "metadata API returned HTTP {}",
                status
            )));
        }

        let body: TokenMetaResponse = response
            .json()
            .await
            .map_err(|e| MetadataError::Parse(e.to_string()))?;
        Ok(body.into_token_info(mint))
    }
}
