//! # Error Types Module
//!
//! Errors surfaced by the bot's collaborators and configuration loading.

use thiserror::Error;

/// Errors produced while configuring the bot or talking to external services
#[derive(Debug, Error)]
pub enum BotError {
    /// Missing or malformed configuration value
    #[error("Configuration error: {0}")]
    Config(String),
    /// Frinkiac search request or response decoding failed
    #[error("Search error: {0}")]
    Search(#[from] reqwest::Error),
    /// A URL handed to Telegram could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Telegram Bot API request failed
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_formatting() {
        let err = BotError::Config("TELEGRAM_BOT_TOKEN must be set".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: TELEGRAM_BOT_TOKEN must be set"
        );

        let err = BotError::InvalidUrl("not a url".to_string());
        assert_eq!(err.to_string(), "Invalid URL: not a url");
    }
}
