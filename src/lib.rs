//! Solwatch - Solana lookup bot library
//!
//! A Telegram bot that answers wallet and token lookups against Solana RPC,
//! a token-metadata API and a price-quote API.
//!
//! # Modules
//!
//! - `domain`: Request-scoped value types (TokenInfo, AnalysisResult)
//! - `ports`: Trait abstractions over the three upstream services
//! - `adapters`: External implementations (Solana RPC, metadata API, price API, CLI)
//! - `limiter`: Spacing and concurrency bound for outbound calls
//! - `application`: Analysis orchestrator and service wiring
//! - `bot`: Telegram command dispatch and reply formatting
//! - `config`: Configuration loading and validation

pub mod adapters;
pub mod application;
pub mod bot;
pub mod config;
pub mod domain;
pub mod limiter;
pub mod ports;
