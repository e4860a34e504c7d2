mod client;
mod types;

pub use client::{MetadataClient, MetadataConfig};
