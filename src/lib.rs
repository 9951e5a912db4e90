//! Telegram Bot API notification client.
//!
//! This crate provides a thin async client for pushing notifications (text,
//! media files, venues, contacts) to one or more Telegram chats. Multi-chat
//! sends fan out as one request per chat and collect per-chat results.
//!
//! # Example
//!
//! ```rust,ignore
//! use tg_notify::Notifier;
//!
//! let notifier = Notifier::new("BOT_TOKEN");
//! let responses = notifier.send_text("Hello, <b>World!</b>", 123456789).await?;
//! assert_eq!(responses[0].status.as_u16(), 200);
//! ```

mod client;
mod error;
mod media;
mod models;

pub use client::Notifier;
pub use error::Error;
pub use media::MediaKind;
pub use models::{ChatId, ParseMode, Recipients, SendResponse};

pub type Result<T> = std::result::Result<T, Error>;
