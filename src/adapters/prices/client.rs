//! Price Client
//!
//! Batch price quotes from a CoinGecko-style `/simple/price` endpoint. Any
//! failure discards the whole batch; there is no partial result.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::ports::{PriceError, PricePort};

/// Configuration for the price client
#[derive(Debug, Clone)]
pub struct PriceConfig {
    /// Price API base URL
    pub api_url: String,
    /// Fiat currency the quotes are denominated in
    pub currency: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.coingecko.com/api/v3".to_string(),
            currency: "usd".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the price-quote API
#[derive(Debug, Clone)]
pub struct PriceClient {
    config: PriceConfig,
    http: Client,
}

/// `/simple/price` returns `{id: {currency: price}}`
type PriceResponse = HashMap<String, HashMap<String, f64>>;

impl PriceClient {
    pub fn new(config: PriceConfig) -> Result<Self, PriceError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PriceError::Fetch(e.to_string()))?;
        Ok(Self { config, http })
    }

    fn flatten(response: PriceResponse, currency: &str) -> HashMap<String, f64> {
        response
            .into_iter()
            .filter_map(|(id, quotes)| quotes.get(currency).map(|price| (id, *price)))
            .collect()
    }
}

#[async_trait]
impl PricePort for PriceClient {
    async fn get_prices(&self, ids: &[String]) -> Result<HashMap<String, f64>, PriceError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let url = format!(
            "{}/simple/price?ids={}&vs_currencies={}",
            self.config.api_url.trim_end_matches('/'),
            ids.join(","),
            self.config.currency
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PriceError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PriceError::Fetch(format!(
                "price API returned HTTP {}",
                status
            )));
        }

        let body: PriceResponse = response
            .json()
            .await
            .map_err(|e| PriceError::Parse(e.to_string()))?;
        Ok(Self::flatten(body, &self.config.currency))
    }
}
