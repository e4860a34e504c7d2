use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

/// Price fetch error type
#[derive(Debug, Error)]
pub enum PriceError {
    #[error("Price fetch failed: {0}")]
    Fetch(String),

    #[error("Failed to parse price response: {0}")]
    Parse(String),
}

/// Current price quotes by asset identifier.
#[async_trait]
pub trait PricePort: Send + Sync {
    /// Quotes for the given asset ids, in one fiat currency.
    ///
    /// All-or-nothing: any failure discards the whole batch, there is no
    /// partial result.
    async fn get_prices(&self, ids: &[String]) -> Result<HashMap<String, f64>, PriceError>;
}
