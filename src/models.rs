use std::fmt;

use reqwest::StatusCode;
use serde::Serialize;

/// Numeric identifier of a destination chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId(id)
    }
}

/// Ordered set of destination chats for a single send call.
///
/// A single chat id, a `Vec`, a slice, or an array all convert into it, so
/// send methods accept `impl Into<Recipients>`.
#[derive(Debug, Clone)]
pub struct Recipients(Vec<ChatId>);

impl Recipients {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ChatId> + '_ {
        self.0.iter().copied()
    }
}

impl From<ChatId> for Recipients {
    fn from(id: ChatId) -> Self {
        Recipients(vec![id])
    }
}

impl From<i64> for Recipients {
    fn from(id: i64) -> Self {
        Recipients(vec![ChatId(id)])
    }
}

impl From<Vec<ChatId>> for Recipients {
    fn from(ids: Vec<ChatId>) -> Self {
        Recipients(ids)
    }
}

impl From<Vec<i64>> for Recipients {
    fn from(ids: Vec<i64>) -> Self {
        Recipients(ids.into_iter().map(ChatId).collect())
    }
}

impl From<&[i64]> for Recipients {
    fn from(ids: &[i64]) -> Self {
        Recipients(ids.iter().copied().map(ChatId).collect())
    }
}

impl<const N: usize> From<[i64; N]> for Recipients {
    fn from(ids: [i64; N]) -> Self {
        Recipients(ids.into_iter().map(ChatId).collect())
    }
}

/// Text formatting mode for `send_text`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    #[default]
    #[serde(rename = "HTML")]
    Html,
    Markdown,
    MarkdownV2,
}

/// Outcome of one per-chat request from which a response was obtained
#[derive(Debug, Clone)]
pub struct SendResponse {
    pub chat_id: ChatId,
    pub status: StatusCode,
    pub body: String,
}
