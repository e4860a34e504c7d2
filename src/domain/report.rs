//! Request-scoped value types
//!
//! Everything here lives for a single command invocation. Nothing is cached
//! or shared across requests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Lamports per SOL.
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Convert a lamport amount to SOL.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL
}

/// Descriptive token metadata fetched per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Mint address of the token
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Total supply in base units, when the API reports it
    #[serde(default)]
    pub supply: Option<u64>,
}

/// Aggregate result of one `/check` invocation.
///
/// Owned solely by the handler of that one command; discarded after the
/// reply is sent.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub token: TokenInfo,
    /// Wallet's holding of the token, ui-scaled (0 when no token account exists)
    pub balance: f64,
    /// Quotes for the configured asset ids, in the configured fiat currency
    pub prices: HashMap<String, f64>,
    /// Current fee per signature, in lamports
    pub fee_lamports: u64,
}

impl AnalysisResult {
    /// Quote for the chain's native asset, when it was part of the batch.
    pub fn native_price(&self) -> Option<f64> {
        self.prices.get("solana").copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamports_to_sol() {
        assert_eq!(lamports_to_sol(1_000_000_000), 1.0);
        assert_eq!(lamports_to_sol(5_000), 0.000005);
        assert_eq!(lamports_to_sol(0), 0.0);
    }

    #[test]
    fn test_native_price() {
        let mut prices = HashMap::new();
        prices.insert("solana".to_string(), 142.5);
        let result = AnalysisResult {
            token: TokenInfo {
                address: "Mint111".to_string(),
                name: "Test".to_string(),
                symbol: "TST".to_string(),
                decimals: 6,
                icon: None,
                website: None,
                supply: None,
            },
            balance: 10.0,
            prices,
            fee_lamports: 5000,
        };
        assert_eq!(result.native_price(), Some(142.5));
    }

    #[test]
    fn test_token_info_deserialize_minimal() {
        let json = r#"{"address":"Mint111","name":"Test","symbol":"TST","decimals":9}"#;
        let info: TokenInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.symbol, "TST");
        assert!(info.icon.is_none());
        assert!(info.supply.is_none());
    }
}
