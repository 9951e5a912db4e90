use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Connection, DNS, or timeout failure before a response was obtained
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Telegram API returned a non-2xx response
    #[error("Telegram API error: {status} - {body}")]
    Api { status: StatusCode, body: String },

    /// Telegram rejected the bot token (401/404 on the bot endpoint)
    #[error("Authentication failed: {status} - {body}")]
    Auth { status: StatusCode, body: String },

    /// Media file could not be read
    #[error("Failed to read media file: {0}")]
    Io(#[from] std::io::Error),
}
