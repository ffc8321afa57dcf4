//! Bot module for routing Telegram updates
//!
//! This module is split into several submodules:
//! - `message_handler`: Handles direct text messages (`/start`, `/help`)
//! - `inline_handler`: Answers inline queries with Frinkiac screenshots
//! - `ui_builder`: Fixed replies and photo result assembly

pub mod inline_handler;
pub mod message_handler;
pub mod ui_builder;

use std::sync::Arc;

use teloxide::types::{InlineQuery, Message};

use crate::config::DispatcherConfig;
use crate::errors::BotError;
use crate::search::SearchClient;
use crate::telegram::ChatClient;

pub use inline_handler::{parse_inline_query, InlineRequest};
pub use ui_builder::{build_photo_results, HELP_MESSAGE, START_MESSAGE};

/// An inbound event, reduced to the fields the bot looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomingUpdate {
    /// A message sent to the bot in a chat
    Message { text: Option<String>, chat_id: i64 },
    /// A search-as-you-type request
    InlineQuery { id: String, query: String },
    /// Any update kind the bot does not handle
    Other,
}

impl From<&Message> for IncomingUpdate {
    fn from(msg: &Message) -> Self {
        IncomingUpdate::Message {
            text: msg.text().map(str::to_owned),
            chat_id: msg.chat.id.0,
        }
    }
}

impl From<&InlineQuery> for IncomingUpdate {
    fn from(query: &InlineQuery) -> Self {
        IncomingUpdate::InlineQuery {
            id: query.id.to_string(),
            query: query.query.clone(),
        }
    }
}

/// Routes updates to the message or inline query handler
///
/// Collaborators are injected at construction so they can be replaced by
/// test doubles. The dispatcher keeps no per-update state and can be shared
/// between concurrent handler tasks.
#[derive(Clone)]
pub struct UpdateDispatcher {
    search: Arc<dyn SearchClient>,
    chat: Arc<dyn ChatClient>,
    config: DispatcherConfig,
}

impl UpdateDispatcher {
    pub fn new(
        search: Arc<dyn SearchClient>,
        chat: Arc<dyn ChatClient>,
        config: DispatcherConfig,
    ) -> Self {
        Self {
            search,
            chat,
            config,
        }
    }

    /// Handle a single update
    ///
    /// Chat client failures are returned to the caller; search failures are
    /// absorbed by the inline handler.
    pub async fn handle(&self, update: IncomingUpdate) -> Result<(), BotError> {
        match update {
            IncomingUpdate::Message { text, chat_id } => {
                message_handler::handle_message(self.chat.as_ref(), text.as_deref(), chat_id).await
            }
            IncomingUpdate::InlineQuery { id, query } => {
                inline_handler::handle_inline_query(
                    self.search.as_ref(),
                    self.chat.as_ref(),
                    &self.config,
                    &id,
                    &query,
                )
                .await
            }
            IncomingUpdate::Other => Ok(()),
        }
    }
}
