//! Contact-form relay
//!
//! The landing page posts form submissions here instead of talking to
//! Telegram directly, which keeps the bot credentials off the client.

pub mod message;
pub mod telegram;

pub use message::Submission;
pub use telegram::TelegramClient;
