use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::InlineQuery;
use tracing::info;
use tracing_subscriber::EnvFilter;

use frinkiac_bot::bot::{IncomingUpdate, UpdateDispatcher};
use frinkiac_bot::config::BotConfig;
use frinkiac_bot::search::FrinkiacClient;
use frinkiac_bot::telegram::TelegramClient;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_tracing();

    info!("Starting Frinkiac Telegram Bot");

    let config = BotConfig::from_env()?;
    info!(frinkiac_base_url = %config.frinkiac_base_url, "Configuration loaded");

    let telegram = TelegramClient::new(config.bot_token.clone());
    let bot = telegram.bot();
    let dispatcher = Arc::new(UpdateDispatcher::new(
        Arc::new(FrinkiacClient::new(config.frinkiac_base_url.clone())),
        Arc::new(telegram),
        config.dispatcher.clone(),
    ));

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint({
            let dispatcher = Arc::clone(&dispatcher);
            move |msg: Message| {
                let dispatcher = Arc::clone(&dispatcher);
                async move { dispatcher.handle(IncomingUpdate::from(&msg)).await }
            }
        }))
        .branch(Update::filter_inline_query().endpoint({
            let dispatcher = Arc::clone(&dispatcher);
            move |query: InlineQuery| {
                let dispatcher = Arc::clone(&dispatcher);
                async move { dispatcher.handle(IncomingUpdate::from(&query)).await }
            }
        }));

    // Updates never share state, so they are not serialized per chat
    Dispatcher::builder(bot, handler)
        .distribution_function(|_| None::<std::convert::Infallible>)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
