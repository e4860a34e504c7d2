//! Telegram transport
//!
//! Long-polling dispatcher over teloxide. Each incoming message is handled
//! independently; the Ctrl-C handler stops the dispatcher gracefully.

mod command;
mod handlers;

pub use command::Command;
pub use handlers::{answer, balance_reply, check_reply, gas_reply, help_text, prices_reply};

use anyhow::Result;
use teloxide::dptree;
use teloxide::prelude::*;
use tracing::info;

use crate::application::Services;

/// Launch the bot and block until it is stopped.
pub async fn run_bot(token: String, services: Services) -> Result<()> {
    let bot = Bot::new(token);

    let handler = Update::filter_message()
        .branch(teloxide::filter_command::<Command, _>().endpoint(answer));

    info!("Starting Telegram dispatcher");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![services])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    info!("Telegram dispatcher stopped");

    Ok(())
}
