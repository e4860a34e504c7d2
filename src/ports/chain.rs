use async_trait::async_trait;
use thiserror::Error;

/// Chain read error type
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("RPC request failed: {0}")]
    Network(String),
}

/// Read-only access to the ledger.
///
/// All operations are idempotent and side-effect-free beyond the network
/// call itself. Implementations must reject malformed addresses before
/// touching the network.
#[async_trait]
pub trait ChainPort: Send + Sync {
    /// Native balance of an account, in lamports.
    async fn get_balance(&self, address: &str) -> Result<u64, ChainError>;

    /// Ui-scaled balance the owner holds of the given mint.
    ///
    /// A wallet with no token account for the mint yields 0, not an error.
    async fn get_token_balance(&self, owner: &str, mint: &str) -> Result<f64, ChainError>;

    /// Current fee per signature, in lamports.
    async fn get_recent_fee(&self) -> Result<u64, ChainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChainError::InvalidAddress("not-a-key".to_string());
        assert!(err.to_string().contains("Invalid address"));

        let err = ChainError::Network("connection refused".to_string());
        assert!(err.to_string().contains("RPC request failed"));
    }
}
