//! Application Layer - service wiring and the analysis orchestrator

mod orchestrator;

pub use orchestrator::{AnalysisError, AnalysisOrchestrator};

use std::sync::Arc;

use crate::limiter::RateLimiter;
use crate::ports::{ChainPort, MetadataPort, PricePort};

/// Everything a command handler needs, built once at startup and injected.
///
/// Cheap to clone; handlers share the ports and the one process-wide
/// limiter through `Arc`s.
#[derive(Clone)]
pub struct Services {
    pub chain: Arc<dyn ChainPort>,
    pub metadata: Arc<dyn MetadataPort>,
    pub prices: Arc<dyn PricePort>,
    pub limiter: RateLimiter,
    /// Asset ids quoted by /prices and /check
    pub price_ids: Vec<String>,
    /// Fiat currency the quotes are denominated in
    pub currency: String,
}

impl Services {
    pub fn new(
        chain: Arc<dyn ChainPort>,
        metadata: Arc<dyn MetadataPort>,
        prices: Arc<dyn PricePort>,
        limiter: RateLimiter,
        price_ids: Vec<String>,
        currency: String,
    ) -> Self {
        Self {
            chain,
            metadata,
            prices,
            limiter,
            price_ids,
            currency,
        }
    }

    /// Orchestrator over the same ports and limiter.
    pub fn orchestrator(&self) -> AnalysisOrchestrator {
        AnalysisOrchestrator::new(
            Arc::clone(&self.chain),
            Arc::clone(&self.metadata),
            Arc::clone(&self.prices),
            self.limiter.clone(),
            self.price_ids.clone(),
        )
    }
}
