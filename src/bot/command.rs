use teloxide::utils::command::BotCommands;

/// The five chat commands the bot answers.
///
/// `Check` and `Balance` capture the raw argument tail; handlers do the
/// arity check so a wrong argument count gets a usage reply instead of
/// being silently ignored.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "token held by a wallet: /check <TOKEN_ADDRESS> <WALLET_ADDRESS>")]
    Check(String),
    #[command(description = "native balance: /balance <WALLET_ADDRESS>")]
    Balance(String),
    #[command(description = "current prices for the configured assets")]
    Prices,
    #[command(description = "current fee per signature")]
    Gas,
    #[command(description = "show this help")]
    Help,
}
