//! CLI surface
//!
//! `run` starts the Telegram bot; `check` runs a one-shot analysis against
//! the same orchestrator and prints the result to stdout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Solwatch - Telegram lookup bot for Solana wallets and tokens
#[derive(Parser, Debug)]
#[command(
    name = "solwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Telegram lookup bot for Solana wallets and tokens",
    long_about = "Solwatch answers /check, /balance, /prices, /gas and /help by querying \
                  Solana RPC, a token-metadata API and a price-quote API."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the Telegram bot
    Run(RunCmd),

    /// One-shot token analysis, printed to stdout
    Check(CheckCmd),
}

/// Start the Telegram bot
#[derive(Parser, Debug)]
pub struct RunCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    pub config: PathBuf,
}

/// One-shot token analysis
#[derive(Parser, Debug)]
pub struct CheckCmd {
    /// Token mint address
    #[arg(value_name = "TOKEN_ADDRESS")]
    pub mint: String,

    /// Wallet address
    #[arg(value_name = "WALLET_ADDRESS")]
    pub wallet: String,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let args = vec!["solwatch", "run", "--config", "test.toml"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Run(cmd) => assert_eq!(cmd.config, PathBuf::from("test.toml")),
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_default_config_path() {
        let args = vec!["solwatch", "run"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Run(cmd) => assert_eq!(cmd.config, PathBuf::from("config.toml")),
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_parse_check() {
        let args = vec!["solwatch", "check", "Mint111", "Wallet222"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Check(cmd) => {
                assert_eq!(cmd.mint, "Mint111");
                assert_eq!(cmd.wallet, "Wallet222");
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_check_requires_both_addresses() {
        let args = vec!["solwatch", "check", "Mint111"];
        assert!(CliApp::try_parse_from(args).is_err());
    }

    #[test]
    fn test_global_flags() {
        let args = vec!["solwatch", "-v", "--debug", "run"];
        let app = CliApp::try_parse_from(args).unwrap();

        assert!(app.verbose);
        assert!(app.debug);
    }
}
