//! Wire types for the token metadata API

use serde::Deserialize;

use crate::domain::TokenInfo;

/// Response body of `GET /token/meta`.
#[derive(Debug, Deserialize)]
pub struct TokenMetaResponse {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub decimals: u8,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Total supply in base units, reported as a decimal string
    #[serde(default)]
    pub supply: Option<String>,
}

impl TokenMetaResponse {
    pub fn into_token_info(self, mint: &str) -> TokenInfo {
        TokenInfo {
            address: mint.to_string(),
            name: self.name,
            symbol: self.symbol,
            decimals: self.decimals,
            icon: self.icon,
            website: self.website,
            supply: self.supply.and_then(|s| s.parse().ok()),
        }
    }
}
