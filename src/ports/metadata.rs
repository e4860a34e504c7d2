use async_trait::async_trait;
use thiserror::Error;

use crate::domain::TokenInfo;

/// Metadata fetch error type
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Metadata fetch failed: {0}")]
    Fetch(String),

    #[error("Failed to parse metadata response: {0}")]
    Parse(String),
}

/// Token metadata lookups.
#[async_trait]
pub trait MetadataPort: Send + Sync {
    /// Descriptive metadata for a mint. Any non-success HTTP status or
    /// transport failure is a [`MetadataError::Fetch`]; no retry.
    async fn get_token_info(&self, mint: &str) -> Result<TokenInfo, MetadataError>;
}
