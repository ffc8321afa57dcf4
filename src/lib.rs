//! # Frinkiac Telegram Bot
//!
//! An inline Telegram bot that searches Simpsons screenshots on frinkiac.com
//! and can render them with a user supplied caption.

pub mod bot;
pub mod caption;
pub mod config;
pub mod errors;
pub mod result_id;
pub mod search;
pub mod telegram;
