//! Ports Layer - Trait definitions for the upstream services
//!
//! Interfaces the command handlers and the orchestrator talk to. One trait
//! per upstream, with its error enum next to it:
//! - Chain reads (balances, fee per signature)
//! - Token metadata lookups
//! - Price quotes

pub mod chain;
pub mod metadata;
pub mod price;

pub use chain::{ChainError, ChainPort};
pub use metadata::{MetadataError, MetadataPort};
pub use price::{PriceError, PricePort};
