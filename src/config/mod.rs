mod loader;

pub use loader::{
    load_config, Config, ConfigError, LimiterSection, LoggingSection, MetadataSection,
    PricesSection, SolanaSection, TelegramSection,
};
