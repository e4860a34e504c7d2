//! Adapters Layer - Implementations of the ports against real services
//!
//! - `solana`: chain reads over Solana JSON-RPC
//! - `metadata`: token metadata HTTP API
//! - `prices`: price-quote HTTP API
//! - `cli`: clap command-line surface

pub mod cli;
pub mod metadata;
pub mod prices;
pub mod solana;
