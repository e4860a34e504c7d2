//! Solwatch - Telegram lookup bot for Solana
//!
//! Answers /check, /balance, /prices, /gas and /help by querying Solana
//! RPC, a token-metadata API and a price-quote API.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use solwatch::adapters::cli::{CheckCmd, CliApp, Command, RunCmd};
use solwatch::adapters::metadata::MetadataClient;
use solwatch::adapters::prices::PriceClient;
use solwatch::adapters::solana::SolanaRpc;
use solwatch::application::Services;
use solwatch::bot::run_bot;
use solwatch::config::{load_config, Config, LoggingSection};
use solwatch::domain::lamports_to_sol;
use solwatch::limiter::RateLimiter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if it exists (secrets go here, not in config.toml)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    match app.command {
        Command::Run(cmd) => run_command(cmd, app.verbose, app.debug).await,
        Command::Check(cmd) => check_command(cmd, app.verbose, app.debug).await,
    }
}

/// Console layer always; append-only file layer when configured.
fn init_logging(cfg: &LoggingSection, verbose: bool, debug: bool) -> Result<()> {
    let default_level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        cfg.level.as_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let stdout_layer = fmt::layer().with_target(false);

    if cfg.log_to_file {
        let path = shellexpand::tilde(&cfg.log_file).to_string();
        if let Some(dir) = Path::new(&path).parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path))?;
        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(Arc::new(file));
        tracing_subscriber::registry()
            .with(filter)
            .with(stdout_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stdout_layer)
            .init();
    }

    Ok(())
}

/// Build the three clients and the shared limiter from config.
fn build_services(config: &Config) -> Result<Services> {
    let chain = Arc::new(SolanaRpc::new(config.solana.get_rpc_url()));
    let metadata = Arc::new(
        MetadataClient::new(config.metadata.client_config())
            .context("Failed to create metadata client")?,
    );
    let prices = Arc::new(
        PriceClient::new(config.prices.client_config()).context("Failed to create price client")?,
    );
    let limiter = RateLimiter::new(config.limiter.min_interval(), config.limiter.max_concurrent);

    Ok(Services::new(
        chain,
        metadata,
        prices,
        limiter,
        config.prices.ids.clone(),
        config.prices.currency.clone(),
    ))
}

async fn run_command(cmd: RunCmd, verbose: bool, debug: bool) -> Result<()> {
    let config = load_config(&cmd.config).context("Failed to load configuration")?;
    init_logging(&config.logging, verbose, debug)?;

    let token = config.telegram.get_bot_token();
    if token.is_empty() {
        bail!(
            "No bot token configured: set TELOXIDE_TOKEN or [telegram].bot_token in {}",
            cmd.config.display()
        );
    }

    tracing::info!("Starting solwatch bot...");
    let services = build_services(&config)?;

    run_bot(token, services).await?;
    tracing::info!("Solwatch stopped");
    Ok(())
}

async fn check_command(cmd: CheckCmd, verbose: bool, debug: bool) -> Result<()> {
    let config = load_config(&cmd.config).context("Failed to load configuration")?;
    init_logging(&config.logging, verbose, debug)?;

    let services = build_services(&config)?;
    let report = services.orchestrator().analyze(&cmd.wallet, &cmd.mint).await?;

    println!("Token:   {} ({})", report.token.name, report.token.symbol);
    println!("Mint:    {}", report.token.address);
    println!("Balance: {} {}", report.balance, report.token.symbol);
    if let Some(price) = report.native_price() {
        println!(
            "SOL:     {:.2} {}",
            price,
            config.prices.currency.to_uppercase()
        );
    }
    println!(
        "Fee:     {} lamports ({:.9} SOL) per signature",
        report.fee_lamports,
        lamports_to_sol(report.fee_lamports)
    );

    Ok(())
}
