//! Analysis Orchestrator
//!
//! Composes the three upstream clients into one aggregate result for a
//! (wallet, mint) pair. Strictly sequential, all-or-nothing: the first
//! failing sub-call aborts the analysis and surfaces one wrapping error.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::AnalysisResult;
use crate::limiter::RateLimiter;
use crate::ports::{ChainPort, MetadataPort, PricePort};

/// Single error surfaced when any sub-call of an analysis fails.
#[derive(Debug, Error)]
#[error("Analysis failed: {0}")]
pub struct AnalysisError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

impl AnalysisError {
    fn wrap<E: std::error::Error + Send + Sync + 'static>(cause: E) -> Self {
        Self(Box::new(cause))
    }
}

/// Composes metadata, balance, price and fee lookups for /check.
pub struct AnalysisOrchestrator {
    chain: Arc<dyn ChainPort>,
    metadata: Arc<dyn MetadataPort>,
    prices: Arc<dyn PricePort>,
    limiter: RateLimiter,
    price_ids: Vec<String>,
}

impl AnalysisOrchestrator {
    pub fn new(
        chain: Arc<dyn ChainPort>,
        metadata: Arc<dyn MetadataPort>,
        prices: Arc<dyn PricePort>,
        limiter: RateLimiter,
        price_ids: Vec<String>,
    ) -> Self {
        Self {
            chain,
            metadata,
            prices,
            limiter,
            price_ids,
        }
    }

    /// Run the four lookups in sequence and assemble the aggregate.
    pub async fn analyze(&self, wallet: &str, mint: &str) -> Result<AnalysisResult, AnalysisError> {
        let token = self
            .limiter
            .run(self.metadata.get_token_info(mint))
            .await
            .map_err(AnalysisError::wrap)?;

        let balance = self
            .limiter
            .run(self.chain.get_token_balance(wallet, mint))
            .await
            .map_err(AnalysisError::wrap)?;

        let prices = self
            .limiter
            .run(self.prices.get_prices(&self.price_ids))
            .await
            .map_err(AnalysisError::wrap)?;

        let fee_lamports = self
            .limiter
            .run(self.chain.get_recent_fee())
            .await
            .map_err(AnalysisError::wrap)?;

        Ok(AnalysisResult {
            token,
            balance,
            prices,
            fee_lamports,
        })
    }
}
