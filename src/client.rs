use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use tracing::{error, info};

use crate::error::Error;
use crate::models::{ChatId, ParseMode, Recipients, SendResponse};

/// Default Telegram Bot API host.
const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Per-request timeout applied by [`Notifier::new`].
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Telegram Bot API notification client.
///
/// Owns the HTTP connection pool for its lifetime; dropping the client
/// releases the pool. Multi-recipient sends fan out sequentially, one
/// request per chat, and collect per-chat results in recipient order.
pub struct Notifier {
    client: Client,
    base_url: String,
}

impl Notifier {
    /// Create a client with its own connection pool and a default
    /// per-request timeout.
    pub fn new(token: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");
        Self::with_client(client, token)
    }

    /// Create a client on a shared reqwest client (pool reuse across
    /// notifiers; timeout policy is the caller's).
    pub fn with_client(client: Client, token: impl Into<String>) -> Self {
        Self::with_api_base(client, DEFAULT_API_BASE, token)
    }

    /// Create a client against a non-default API host. Used to point the
    /// client at a mock server in tests.
    pub fn with_api_base(
        client: Client,
        api_base: impl AsRef<str>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: format!(
                "{}/bot{}/",
                api_base.as_ref().trim_end_matches('/'),
                token.into()
            ),
        }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Send one request and classify the outcome.
    ///
    /// A transport failure (connection, DNS, timeout) maps to
    /// [`Error::Request`]; a non-2xx status maps to [`Error::Api`], except
    /// 401/404 which indicate a rejected bot token and map to
    /// [`Error::Auth`]. Every outcome is logged with the chat id and
    /// endpoint before returning.
    pub(crate) async fn dispatch(
        &self,
        endpoint: &str,
        chat_id: ChatId,
        request: RequestBuilder,
    ) -> crate::Result<SendResponse> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Request error sending {} to chat {}: {}", endpoint, chat_id, e);
                return Err(Error::Request(e));
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            info!("{} delivered to chat {}", endpoint, chat_id);
            return Ok(SendResponse {
                chat_id,
                status,
                body,
            });
        }

        error!(
            "HTTP error sending {} to chat {}: {} - {}",
            endpoint, chat_id, status, body
        );
        // 401/404 on the bot endpoint mean the token itself is bad
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::NOT_FOUND {
            Err(Error::Auth { status, body })
        } else {
            Err(Error::Api { status, body })
        }
    }

    /// Send a text message to one or more chats, HTML-formatted.
    pub async fn send_text(
        &self,
        text: &str,
        recipients: impl Into<Recipients>,
    ) -> crate::Result<Vec<SendResponse>> {
        self.send_text_with(text, recipients, ParseMode::default())
            .await
    }

    /// Send a text message with an explicit formatting mode.
    pub async fn send_text_with(
        &self,
        text: &str,
        recipients: impl Into<Recipients>,
        parse_mode: ParseMode,
    ) -> crate::Result<Vec<SendResponse>> {
        #[derive(Serialize)]
        struct Params<'a> {
            chat_id: i64,
            text: &'a str,
            parse_mode: ParseMode,
        }

        let recipients = recipients.into();
        let mut responses = Vec::with_capacity(recipients.len());
        for chat_id in recipients.iter() {
            let request = self.client.get(self.url("sendMessage")).query(&Params {
                chat_id: chat_id.0,
                text,
                parse_mode,
            });
            let outcome = self.dispatch("sendMessage", chat_id, request).await;
            record(&mut responses, chat_id, outcome)?;
        }
        Ok(responses)
    }

    /// Send a venue (a point on the map with a title and address) to one or
    /// more chats.
    pub async fn send_venue(
        &self,
        latitude: f64,
        longitude: f64,
        title: &str,
        address: &str,
        recipients: impl Into<Recipients>,
    ) -> crate::Result<Vec<SendResponse>> {
        #[derive(Serialize)]
        struct Params<'a> {
            chat_id: i64,
            latitude: f64,
            longitude: f64,
            title: &'a str,
            address: &'a str,
        }

        let recipients = recipients.into();
        let mut responses = Vec::with_capacity(recipients.len());
        for chat_id in recipients.iter() {
            let request = self.client.get(self.url("sendVenue")).query(&Params {
                chat_id: chat_id.0,
                latitude,
                longitude,
                title,
                address,
            });
            let outcome = self.dispatch("sendVenue", chat_id, request).await;
            record(&mut responses, chat_id, outcome)?;
        }
        Ok(responses)
    }

    /// Send a phone contact to one or more chats.
    pub async fn send_contact(
        &self,
        phone_number: &str,
        first_name: &str,
        last_name: Option<&str>,
        recipients: impl Into<Recipients>,
    ) -> crate::Result<Vec<SendResponse>> {
        #[derive(Serialize)]
        struct Params<'a> {
            chat_id: i64,
            phone_number: &'a str,
            first_name: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            last_name: Option<&'a str>,
        }

        let recipients = recipients.into();
        let mut responses = Vec::with_capacity(recipients.len());
        for chat_id in recipients.iter() {
            let request = self.client.get(self.url("sendContact")).query(&Params {
                chat_id: chat_id.0,
                phone_number,
                first_name,
                last_name,
            });
            let outcome = self.dispatch("sendContact", chat_id, request).await;
            record(&mut responses, chat_id, outcome)?;
        }
        Ok(responses)
    }
}

/// Fold one per-recipient outcome into the fan-out result.
///
/// A response with an error status still becomes an entry (the caller gets
/// the status and body, not an exception). A transport failure skips the
/// recipient, so the entry is omitted. A rejected token aborts the whole
/// fan-out: the remaining requests would fail identically.
pub(crate) fn record(
    responses: &mut Vec<SendResponse>,
    chat_id: ChatId,
    outcome: crate::Result<SendResponse>,
) -> crate::Result<()> {
    match outcome {
        Ok(response) => responses.push(response),
        Err(Error::Api { status, body }) => responses.push(SendResponse {
            chat_id,
            status,
            body,
        }),
        Err(e @ Error::Auth { .. }) => return Err(e),
        Err(_) => {}
    }
    Ok(())
}
