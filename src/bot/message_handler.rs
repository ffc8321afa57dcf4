//! Message Handler module for processing direct messages sent to the bot

use tracing::debug;

use crate::errors::BotError;
use crate::telegram::ChatClient;

use super::ui_builder::{HELP_MESSAGE, START_MESSAGE};

/// Reply to `/start` and `/help`; everything else is ignored
pub async fn handle_message(
    chat: &dyn ChatClient,
    text: Option<&str>,
    chat_id: i64,
) -> Result<(), BotError> {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        debug!(chat_id = %chat_id, "Ignoring message without text");
        return Ok(());
    };

    debug!(chat_id = %chat_id, message_length = text.len(), "Received text message");

    if text.starts_with("/start") {
        chat.send_text(START_MESSAGE, chat_id).await?;
    }

    if text.starts_with("/help") {
        chat.send_text(HELP_MESSAGE, chat_id).await?;
    }

    Ok(())
}
