//! # Telegram Module
//!
//! Outbound side of the Telegram Bot API. The dispatcher only sees the
//! [`ChatClient`] trait; [`TelegramClient`] implements it with teloxide.

use async_trait::async_trait;
use reqwest::Url;
use teloxide::prelude::*;
use teloxide::types::{InlineQueryId, InlineQueryResult, InlineQueryResultPhoto};
use tracing::debug;

use crate::errors::BotError;

/// A photo entry of an inline query answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoResult {
    /// Identifier unique within the answer
    pub id: String,
    /// Full-size image URL, sent to the chat when the result is picked
    pub photo_url: String,
    /// Preview image URL shown in the results strip
    pub thumbnail_url: String,
    pub photo_width: u32,
    pub photo_height: u32,
}

/// Chat platform operations the bot needs
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a plain text message to a chat
    async fn send_text(&self, text: &str, chat_id: i64) -> Result<(), BotError>;

    /// Answer an inline query with an ordered list of photos
    async fn answer_inline_query(
        &self,
        query_id: &str,
        results: Vec<PhotoResult>,
    ) -> Result<(), BotError>;
}

/// Telegram Bot API client backed by teloxide
#[derive(Debug, Clone)]
pub struct TelegramClient {
    bot: Bot,
}

impl TelegramClient {
    /// Create a client authenticated with `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self::from_bot(Bot::new(token))
    }

    /// Wrap an already configured bot, e.g. one pointed at another API URL
    pub fn from_bot(bot: Bot) -> Self {
        Self { bot }
    }

    /// The underlying teloxide bot, used to drive the update dispatcher
    pub fn bot(&self) -> Bot {
        self.bot.clone()
    }
}

#[async_trait]
impl ChatClient for TelegramClient {
    async fn send_text(&self, text: &str, chat_id: i64) -> Result<(), BotError> {
        self.bot.send_message(ChatId(chat_id), text).await?;
        debug!(chat_id = %chat_id, "Text message sent");
        Ok(())
    }

    async fn answer_inline_query(
        &self,
        query_id: &str,
        results: Vec<PhotoResult>,
    ) -> Result<(), BotError> {
        let results = results
            .into_iter()
            .map(to_inline_result)
            .collect::<Result<Vec<_>, _>>()?;

        self.bot
            .answer_inline_query(InlineQueryId(query_id.to_owned()), results)
            .await?;
        debug!(query_id = %query_id, "Inline query answered");
        Ok(())
    }
}

fn parse_url(raw: &str) -> Result<Url, BotError> {
    Url::parse(raw).map_err(|e| BotError::InvalidUrl(format!("{raw}: {e}")))
}

/// Convert a photo entry into its Bot API representation
pub fn to_inline_result(photo: PhotoResult) -> Result<InlineQueryResult, BotError> {
    let photo_url = parse_url(&photo.photo_url)?;
    let thumbnail_url = parse_url(&photo.thumbnail_url)?;

    Ok(InlineQueryResult::Photo(
        InlineQueryResultPhoto::new(photo.id, photo_url, thumbnail_url)
            .photo_width(photo.photo_width)
            .photo_height(photo.photo_height),
    ))
}
