mod client;

pub use client::{PriceClient, PriceConfig};
