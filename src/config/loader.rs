//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching config.toml
//! structure. Secrets come from the environment (loaded via .env in main),
//! never from the TOML file.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::metadata::MetadataConfig;
use crate::adapters::prices::PriceConfig;

/// Main configuration structure matching config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub telegram: TelegramSection,
    #[serde(default)]
    pub solana: SolanaSection,
    #[serde(default)]
    pub metadata: MetadataSection,
    #[serde(default)]
    pub prices: PricesSection,
    #[serde(default)]
    pub limiter: LimiterSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Telegram transport section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramSection {
    /// Bot token; leave empty and use the TELOXIDE_TOKEN env var instead
    #[serde(default)]
    pub bot_token: String,
}

impl TelegramSection {
    /// Bot token with environment variable override.
    /// Checks TELOXIDE_TOKEN first, falls back to the config value.
    pub fn get_bot_token(&self) -> String {
        std::env::var("TELOXIDE_TOKEN").unwrap_or_else(|_| self.bot_token.clone())
    }
}

/// Solana RPC configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SolanaSection {
    /// RPC endpoint (use a private RPC for production)
    pub rpc_url: String,
}

impl Default for SolanaSection {
    fn default() -> Self {
        Self {
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
        }
    }
}

impl SolanaSection {
    /// RPC URL with environment variable override.
    /// Checks SOLANA_RPC_URL first, falls back to the config value.
    pub fn get_rpc_url(&self) -> String {
        std::env::var("SOLANA_RPC_URL").unwrap_or_else(|_| self.rpc_url.clone())
    }
}

/// Token metadata API section
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataSection {
    /// Metadata API base URL
    pub api_url: String,
    /// Optional bearer credential (or METADATA_API_KEY env var)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MetadataSection {
    fn default() -> Self {
        Self {
            api_url: "https://api.solscan.io".to_string(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MetadataSection {
    /// API key with environment variable fallback.
    /// Checks METADATA_API_KEY when the config value is empty or absent.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return Some(key.clone());
            }
        }
        std::env::var("METADATA_API_KEY").ok()
    }

    pub fn client_config(&self) -> MetadataConfig {
        MetadataConfig {
            api_url: self.api_url.clone(),
            api_key: self.get_api_key(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Price API section
#[derive(Debug, Clone, Deserialize)]
pub struct PricesSection {
    /// Price API base URL
    pub api_url: String,
    /// Fiat currency quotes are denominated in
    pub currency: String,
    /// Asset ids fetched by /prices and /check
    pub ids: Vec<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PricesSection {
    fn default() -> Self {
        Self {
            api_url: "https://api.coingecko.com/api/v3".to_string(),
            currency: "usd".to_string(),
            ids: vec!["solana".to_string()],
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PricesSection {
    pub fn client_config(&self) -> PriceConfig {
        PriceConfig {
            api_url: self.api_url.clone(),
            currency: self.currency.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Outbound call limiter section
#[derive(Debug, Clone, Deserialize)]
pub struct LimiterSection {
    /// Minimum spacing between call starts, in milliseconds
    pub min_interval_ms: u64,
    /// Maximum concurrently executing calls
    pub max_concurrent: usize,
}

impl Default for LimiterSection {
    fn default() -> Self {
        Self {
            min_interval_ms: 200,
            max_concurrent: 4,
        }
    }
}

impl LimiterSection {
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Log to an append-only file in addition to stdout
    pub log_to_file: bool,
    /// Log file path
    pub log_file: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_to_file: true,
            log_file: "logs/solwatch.log".to_string(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solana.rpc_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "rpc_url cannot be empty".to_string(),
            ));
        }

        if self.metadata.api_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "metadata api_url cannot be empty".to_string(),
            ));
        }

        if self.prices.api_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "prices api_url cannot be empty".to_string(),
            ));
        }

        if self.prices.currency.is_empty() {
            return Err(ConfigError::ValidationError(
                "prices currency cannot be empty".to_string(),
            ));
        }

        if self.prices.ids.is_empty() {
            return Err(ConfigError::ValidationError(
                "prices ids cannot be empty".to_string(),
            ));
        }

        if self.limiter.max_concurrent == 0 {
            return Err(ConfigError::ValidationError(format!(
                "max_concurrent must be > 0, got {}",
                self.limiter.max_concurrent
            )));
        }

        Ok(())
    }
}
