use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::client::{record, Notifier};
use crate::models::{Recipients, SendResponse};

/// Supported media upload kinds.
///
/// A closed set instead of a free-form string: each kind carries its Bot API
/// endpoint and the multipart field name the file content must be sent under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Document,
    Audio,
    Video,
}

impl MediaKind {
    /// Bot API endpoint for this kind, e.g. `sendPhoto`
    pub fn endpoint(self) -> &'static str {
        match self {
            MediaKind::Photo => "sendPhoto",
            MediaKind::Document => "sendDocument",
            MediaKind::Audio => "sendAudio",
            MediaKind::Video => "sendVideo",
        }
    }

    /// Multipart field name carrying the file content, e.g. `photo`
    pub fn field(self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::Document => "document",
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
        }
    }
}

impl Notifier {
    /// Upload a local media file to one or more chats.
    ///
    /// The file is read once up front; a missing or unreadable path fails
    /// with [`crate::Error::Io`] before any HTTP request is made. Every
    /// recipient receives the same bytes. `extra` pairs are merged into the
    /// form as additional text fields (e.g. `duration` for audio).
    pub async fn send_media(
        &self,
        path: impl AsRef<Path>,
        recipients: impl Into<Recipients>,
        kind: MediaKind,
        caption: Option<&str>,
        extra: &[(&str, &str)],
    ) -> crate::Result<Vec<SendResponse>> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| kind.field().to_string());

        let recipients = recipients.into();
        let mut responses = Vec::with_capacity(recipients.len());
        for chat_id in recipients.iter() {
            let mut form = Form::new().text("chat_id", chat_id.to_string());
            if let Some(caption) = caption {
                form = form.text("caption", caption.to_string());
            }
            for (key, value) in extra {
                form = form.text(key.to_string(), value.to_string());
            }
            let part = Part::bytes(bytes.clone()).file_name(file_name.clone());
            let form = form.part(kind.field(), part);

            let request = self
                .client()
                .post(self.url(kind.endpoint()))
                .multipart(form);
            let outcome = self.dispatch(kind.endpoint(), chat_id, request).await;
            record(&mut responses, chat_id, outcome)?;
        }
        Ok(responses)
    }

    /// Upload a photo with an optional caption.
    pub async fn send_photo(
        &self,
        path: impl AsRef<Path>,
        recipients: impl Into<Recipients>,
        caption: Option<&str>,
    ) -> crate::Result<Vec<SendResponse>> {
        self.send_media(path, recipients, MediaKind::Photo, caption, &[])
            .await
    }

    /// Upload a document with an optional caption.
    pub async fn send_document(
        &self,
        path: impl AsRef<Path>,
        recipients: impl Into<Recipients>,
        caption: Option<&str>,
    ) -> crate::Result<Vec<SendResponse>> {
        self.send_media(path, recipients, MediaKind::Document, caption, &[])
            .await
    }

    /// Upload an audio file with an optional caption.
    pub async fn send_audio(
        &self,
        path: impl AsRef<Path>,
        recipients: impl Into<Recipients>,
        caption: Option<&str>,
    ) -> crate::Result<Vec<SendResponse>> {
        self.send_media(path, recipients, MediaKind::Audio, caption, &[])
            .await
    }

    /// Upload a video with an optional caption.
    pub async fn send_video(
        &self,
        path: impl AsRef<Path>,
        recipients: impl Into<Recipients>,
        caption: Option<&str>,
    ) -> crate::Result<Vec<SendResponse>> {
        self.send_media(path, recipients, MediaKind::Video, caption, &[])
            .await
    }
}
