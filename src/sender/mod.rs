//! Module dedicated to senders.
//!
//! A sender takes the assembled raw message string and completes the
//! delivery. Two implementations exist: [`HttpSender`], which sends
//! the message via the Gmail REST API, and [`StubSender`], which
//! writes it to a diagnostic output. The [`SenderBuilder`] selects
//! one from the transport configuration.

pub mod http;
pub mod stub;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{message, GmailConfig, Result, SendMode};

#[doc(inline)]
pub use self::{http::HttpSender, stub::StubSender};

/// The request body of the Gmail send message endpoint.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    /// The URL-safe base64 encoding of the raw RFC 2822 message.
    pub raw: String,
}

impl SendMessageRequest {
    pub fn new(raw_message: &str) -> Self {
        Self {
            raw: message::encode_url_safe(raw_message),
        }
    }
}

/// The response of the Gmail send message endpoint.
///
/// It is forwarded to the caller as is, no field is interpreted by
/// the transport.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendMessageResponse {
    /// The id of the sent message.
    pub id: String,

    /// The id of the thread the sent message belongs to.
    pub thread_id: String,

    /// The labels attached to the sent message.
    pub label_ids: Vec<String>,
}

/// The raw message sender interface.
///
/// Implementations deliver the raw message string exactly once per
/// call. The live sender resolves with the Gmail API response, the
/// stub sender resolves with no result.
#[async_trait]
pub trait SendRawMessage: Send + Sync {
    async fn send_raw_message(&self, raw_message: &str) -> Result<Option<SendMessageResponse>>;
}

/// The sender builder.
///
/// Builds the sender matching the configured [`SendMode`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SenderBuilder;

impl SenderBuilder {
    pub fn build(config: Arc<GmailConfig>) -> Result<Box<dyn SendRawMessage>> {
        match config.send_mode {
            SendMode::Live => Ok(Box::new(HttpSender::new(config)?)),
            SendMode::Stub => {
                debug!("building stub sender, no message will be sent");
                Ok(Box::new(StubSender::new()))
            }
        }
    }
}
