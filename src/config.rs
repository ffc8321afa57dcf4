//! # Configuration Module
//!
//! This module defines the bot configuration, loaded once at startup from
//! environment variables (optionally seeded from a `.env` file by `main`).

use crate::caption::EM_WIDTH;
use crate::errors::BotError;

// Constants for bot configuration
pub const DEFAULT_FRINKIAC_BASE_URL: &str = "https://frinkiac.com";
pub const SCREENSHOT_WIDTH: u32 = 640;
pub const SCREENSHOT_HEIGHT: u32 = 480;
pub const TELEGRAM_MAX_INLINE_RESULTS: usize = 50; // Bot API limit per answerInlineQuery

/// Settings used by the update dispatcher when building answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Caption width budget, in "M"-wide characters
    pub caption_width: usize,
    /// Width reported to Telegram for each photo result
    pub photo_width: u32,
    /// Height reported to Telegram for each photo result
    pub photo_height: u32,
    /// Maximum number of results in one inline answer
    pub max_results: usize,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            caption_width: EM_WIDTH,
            photo_width: SCREENSHOT_WIDTH,
            photo_height: SCREENSHOT_HEIGHT,
            max_results: TELEGRAM_MAX_INLINE_RESULTS,
        }
    }
}

/// Full bot configuration
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot token
    pub bot_token: String,
    /// Base URL of the Frinkiac service
    pub frinkiac_base_url: String,
    /// Dispatcher settings
    pub dispatcher: DispatcherConfig,
}

impl BotConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary variable lookup
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frinkiac_bot::config::BotConfig;
    ///
    /// let config = BotConfig::from_lookup(|key| match key {
    ///     "TELEGRAM_BOT_TOKEN" => Some("123:abc".to_string()),
    ///     _ => None,
    /// })?;
    /// assert_eq!(config.frinkiac_base_url, "https://frinkiac.com");
    /// # Ok::<(), frinkiac_bot::errors::BotError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = lookup("TELEGRAM_BOT_TOKEN")
            .or_else(|| lookup("BOT_TOKEN"))
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| BotError::Config("TELEGRAM_BOT_TOKEN must be set".to_string()))?;

        let frinkiac_base_url = lookup("FRINKIAC_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_FRINKIAC_BASE_URL.to_string());

        let defaults = DispatcherConfig::default();
        let caption_width = parse_var(&lookup, "CAPTION_EM_WIDTH")?.unwrap_or(defaults.caption_width);
        if caption_width == 0 {
            return Err(BotError::Config("CAPTION_EM_WIDTH must be positive".to_string()));
        }

        let max_results = parse_var(&lookup, "INLINE_MAX_RESULTS")?.unwrap_or(defaults.max_results);
        if !(1..=TELEGRAM_MAX_INLINE_RESULTS).contains(&max_results) {
            return Err(BotError::Config(format!(
                "INLINE_MAX_RESULTS must be between 1 and {TELEGRAM_MAX_INLINE_RESULTS}"
            )));
        }

        Ok(Self {
            bot_token,
            frinkiac_base_url,
            dispatcher: DispatcherConfig {
                caption_width,
                max_results,
                ..defaults
            },
        })
    }
}

fn parse_var<F>(lookup: &F, key: &str) -> Result<Option<usize>, BotError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| BotError::Config(format!("{key} is not a valid number: {e}"))),
        None => Ok(None),
    }
}
