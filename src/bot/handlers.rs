//! Command handlers
//!
//! Each handler turns its command into reply text. Every upstream error is
//! caught here and rendered as a user-visible message; nothing propagates
//! past the handler, so one failing command never affects the next.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::info;

use super::command::Command;
use crate::application::Services;
use crate::domain::lamports_to_sol;

const ERR_PREFIX: &str = "⚠️";

/// Single dispatch endpoint for all five commands.
pub async fn answer(bot: Bot, msg: Message, cmd: Command, services: Services) -> Result<()> {
    let user = msg.from().map(|u| u.id.to_string()).unwrap_or_default();

    let text = match cmd {
        Command::Check(args) => {
            info!("{}: /check {}", user, args);
            check_reply(&services, &args).await
        }
        Command::Balance(args) => {
            info!("{}: /balance {}", user, args);
            balance_reply(&services, &args).await
        }
        Command::Prices => {
            info!("{}: /prices", user);
            prices_reply(&services).await
        }
        Command::Gas => {
            info!("{}: /gas", user);
            gas_reply(&services).await
        }
        Command::Help => {
            info!("{}: /help", user);
            help_text()
        }
    };

    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

/// `/check <TOKEN_ADDRESS> <WALLET_ADDRESS>` - full analysis of a holding.
pub async fn check_reply(services: &Services, args: &str) -> String {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let &[mint, wallet] = parts.as_slice() else {
        return "Usage: /check <TOKEN_ADDRESS> <WALLET_ADDRESS>".to_string();
    };

    match services.orchestrator().analyze(wallet, mint).await {
        Ok(report) => {
            let mut text = format!(
                "🔎 {} ({})\nMint: {}\nBalance: {} {}\n",
                report.token.name, report.token.symbol, report.token.address, report.balance,
                report.token.symbol,
            );
            if let Some(price) = report.native_price() {
                text.push_str(&format!(
                    "SOL price: {:.2} {}\n",
                    price,
                    services.currency.to_uppercase()
                ));
            }
            text.push_str(&format!(
                "Network fee: {} lamports (~{:.9} SOL) per signature",
                report.fee_lamports,
                lamports_to_sol(report.fee_lamports)
            ));
            text
        }
        Err(e) => format!("{} {}", ERR_PREFIX, e),
    }
}

/// `/balance <WALLET_ADDRESS>` - native balance of a wallet.
pub async fn balance_reply(services: &Services, args: &str) -> String {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let &[wallet] = parts.as_slice() else {
        return "Usage: /balance <WALLET_ADDRESS>".to_string();
    };

    let result = services
        .limiter
        .run(services.chain.get_balance(wallet))
        .await;
    match result {
        Ok(lamports) => format!(
            "Wallet: {}\nBalance: {:.4} SOL ({} lamports)",
            wallet,
            lamports_to_sol(lamports),
            lamports
        ),
        Err(e) => format!("{} {}", ERR_PREFIX, e),
    }
}

/// `/prices` - quotes for the configured asset ids. All-or-nothing: on any
/// upstream failure the reply is an error, never a partial list.
pub async fn prices_reply(services: &Services) -> String {
    let result = services
        .limiter
        .run(services.prices.get_prices(&services.price_ids))
        .await;
    match result {
        Ok(quotes) => {
            let currency = services.currency.to_uppercase();
            let mut lines: Vec<String> = services
                .price_ids
                .iter()
                .filter_map(|id| {
                    quotes
                        .get(id)
                        .map(|price| format!("{}: {:.2} {}", id, price, currency))
                })
                .collect();
            if lines.is_empty() {
                return format!("{} No quotes returned", ERR_PREFIX);
            }
            lines.insert(0, "💱 Current prices".to_string());
            lines.join("\n")
        }
        Err(e) => format!("{} {}", ERR_PREFIX, e),
    }
}

/// `/gas` - current fee per signature.
pub async fn gas_reply(services: &Services) -> String {
    let result = services.limiter.run(services.chain.get_recent_fee()).await;
    match result {
        Ok(fee) => format!(
            "⛽ Fee per signature: {} lamports (~{:.9} SOL)",
            fee,
            lamports_to_sol(fee)
        ),
        Err(e) => format!("{} {}", ERR_PREFIX, e),
    }
}

/// `/help` - static command list, no network calls.
pub fn help_text() -> String {
    Command::descriptions().to_string()
}
