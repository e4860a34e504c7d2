use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use solana_account_decoder::UiAccountData;
use solana_client::rpc_client::RpcClient;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_sdk::{commitment_config::CommitmentConfig, message::Message, pubkey::Pubkey};

use crate::ports::{ChainError, ChainPort};

/// Wrapper around the Solana RPC client with async-compatible methods.
///
/// The underlying client is blocking; every call runs under
/// `spawn_blocking`. Addresses are validated before any network call.
#[derive(Clone)]
pub struct SolanaRpc {
    client: Arc<RpcClient>,
}

impl SolanaRpc {
    /// Create a new Solana RPC client at confirmed commitment
    pub fn new(rpc_url: String) -> Self {
        let client = Arc::new(RpcClient::new_with_commitment(
            rpc_url,
            CommitmentConfig::confirmed(),
        ));
        Self { client }
    }

    fn parse_pubkey(address: &str) -> Result<Pubkey, ChainError> {
        Pubkey::from_str(address).map_err(|e| ChainError::InvalidAddress(e.to_string()))
    }
}

/// Extract the ui-scaled amount from a jsonParsed token account.
///
/// `uiAmount` is null for amounts that overflow f64 precision; fall back to
/// `uiAmountString` in that case.
fn parse_ui_amount(data: &UiAccountData) -> Option<f64> {
    let parsed = match data {
        UiAccountData::Json(account) => &account.parsed,
        _ => return None,
    };
    let amount = &parsed["info"]["tokenAmount"];
    amount["uiAmount"]
        .as_f64()
        .or_else(|| amount["uiAmountString"].as_str()?.parse().ok())
}

#[async_trait]
impl ChainPort for SolanaRpc {
    async fn get_balance(&self, address: &str) -> Result<u64, ChainError> {
        let pubkey = Self::parse_pubkey(address)?;

        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || {
            client
                .get_balance(&pubkey)
                .map_err(|e| ChainError::Network(e.to_string()))
        })
        .await
        .map_err(|e| ChainError::Network(format!("Task join error: {}", e)))?
    }

    async fn get_token_balance(&self, owner: &str, mint: &str) -> Result<f64, ChainError> {
        let owner = Self::parse_pubkey(owner)?;
        let mint = Self::parse_pubkey(mint)?;

        let client = Arc::clone(&self.client);
        let accounts = tokio::task::spawn_blocking(move || {
            client
                .get_token_accounts_by_owner(&owner, TokenAccountsFilter::Mint(mint))
                .map_err(|e| ChainError::Network(e.to_string()))
        })
        .await
        .map_err(|e| ChainError::Network(format!("Task join error: {}", e)))??;

        // No token account for this mint is a zero holding, not an error.
        // A wallet may hold the mint across several accounts; sum them.
        let total = accounts
            .iter()
            .filter_map(|keyed| parse_ui_amount(&keyed.account.data))
            .sum();
        Ok(total)
    }

    async fn get_recent_fee(&self) -> Result<u64, ChainError> {
        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || {
            let blockhash = client
                .get_latest_blockhash()
                .map_err(|e| ChainError::Network(e.to_string()))?;
            // Minimal single-signer message; its fee is the per-signature fee
            let probe = Message::new_with_blockhash(&[], Some(&Pubkey::new_unique()), &blockhash);
            client
                .get_fee_for_message(&probe)
                .map_err(|e| ChainError::Network(e.to_string()))
        })
        .await
        .map_err(|e| ChainError::Network(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use solana_account_decoder::parse_account_data::ParsedAccount;

    #[test]
    fn test_client_creation() {
        let rpc = SolanaRpc::new("https://api.devnet.solana.com".to_string());
        assert!(std::mem::size_of_val(&rpc) > 0);
    }

    #[tokio::test]
    async fn test_invalid_address_fails_before_network() {
        // Endpoint is unroutable; an attempted call would error differently
        let rpc = SolanaRpc::new("http://127.0.0.1:1".to_string());
        let err = rpc.get_balance("definitely-not-a-pubkey").await.unwrap_err();
        assert!(matches!(err, ChainError::InvalidAddress(_)));

        let err = rpc
            .get_token_balance("bad!!", "So11111111111111111111111111111111111111112")
            .await
            .unwrap_err();
        assert!(matches!(err, ChainError::InvalidAddress(_)));
    }

    #[tokio::test]
    async fn test_invalid_mint_fails_before_network() {
        let rpc = SolanaRpc::new("http://127.0.0.1:1".to_string());
        let err = rpc
            .get_token_balance("So11111111111111111111111111111111111111112", "%%%")
            .await
            .unwrap_err();
        assert!(matches!(err, ChainError::InvalidAddress(_)));
    }

    fn parsed_token_account(amount: serde_json::Value) -> UiAccountData {
        UiAccountData::Json(ParsedAccount {
            program: "spl-token".to_string(),
            parsed: json!({
                "type": "account",
                "info": {
                    "mint": "Mint1111111111111111111111111111111111111111",
                    "owner": "Owner111111111111111111111111111111111111111",
                    "tokenAmount": amount,
                }
            }),
            space: 165,
        })
    }

    #[test]
    fn test_parse_ui_amount() {
        let data = parsed_token_account(json!({
            "amount": "1500000",
            "decimals": 6,
            "uiAmount": 1.5,
            "uiAmountString": "1.5"
        }));
        assert_eq!(parse_ui_amount(&data), Some(1.5));
    }

    #[test]
    fn test_parse_ui_amount_falls_back_to_string() {
        let data = parsed_token_account(json!({
            "amount": "2000000",
            "decimals": 6,
            "uiAmount": null,
            "uiAmountString": "2.0"
        }));
        assert_eq!(parse_ui_amount(&data), Some(2.0));
    }

    #[test]
    fn test_parse_ui_amount_rejects_raw_data() {
        let data = UiAccountData::LegacyBinary("AAAA".to_string());
        assert_eq!(parse_ui_amount(&data), None);
    }
}
