//! Module dedicated to the Gmail transport.
//!
//! The transport drives the whole send pipeline: it assembles the raw
//! message string from the composed message stream, then hands it to
//! the configured sender. Each call is independent, the only shared
//! state is the read-only configuration.

use std::{fmt, io, sync::Arc};

use bytes::Bytes;
use futures::Stream;
use tracing::debug;

use crate::{
    message,
    sender::{SendMessageResponse, SendRawMessage, SenderBuilder},
    Error, GmailConfig, Result,
};

/// The Gmail transport.
pub struct GmailTransport {
    /// The transport name, sourced from the package metadata.
    /// Informational only.
    pub name: &'static str,

    /// The transport version, sourced from the package metadata.
    /// Informational only.
    pub version: &'static str,

    /// The Gmail transport configuration.
    config: Arc<GmailConfig>,

    /// The sender delivering assembled raw messages.
    sender: Box<dyn SendRawMessage>,
}

impl fmt::Debug for GmailTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GmailTransport")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GmailTransport {
    /// Creates a new transport from the given configuration.
    ///
    /// Shorthand for the [`GmailTransportBuilder`].
    pub fn new(config: GmailConfig) -> Result<Self> {
        GmailTransportBuilder::new().with_config(config).build()
    }

    /// Returns the transport configuration.
    pub fn config(&self) -> &GmailConfig {
        &self.config
    }

    /// Sends the given composed message.
    ///
    /// The message stream is read to its end and decoded first; the
    /// sender is invoked exactly once afterwards, and never when the
    /// assembly fails. The live sender resolves with the Gmail API
    /// response, the stub sender with `None`.
    pub async fn send(
        &self,
        message: impl Stream<Item = io::Result<Bytes>> + Send,
    ) -> Result<Option<SendMessageResponse>> {
        let raw_message = message::read_to_string(message).await?;
        self.sender.send_raw_message(&raw_message).await
    }
}

/// The Gmail transport builder.
#[derive(Default)]
pub struct GmailTransportBuilder {
    /// The transport configuration, if any.
    config: Option<Arc<GmailConfig>>,

    /// The sender override, if any.
    ///
    /// When defined, it replaces the sender the builder would derive
    /// from the configuration. Mostly useful for testing.
    sender: Option<Box<dyn SendRawMessage>>,
}

impl GmailTransportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines the transport configuration.
    pub fn with_config(mut self, config: impl Into<Arc<GmailConfig>>) -> Self {
        self.config = Some(config.into());
        self
    }

    /// Overrides the sender the transport delivers messages with.
    pub fn with_sender(mut self, sender: Box<dyn SendRawMessage>) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Builds the final transport.
    ///
    /// Fails if no configuration was defined, or if the configuration
    /// requires a live sender but holds no usable access token. No
    /// partially-built transport is ever returned.
    pub fn build(self) -> Result<GmailTransport> {
        debug!("building new gmail transport");

        let config = self.config.ok_or(Error::BuildTransportMissingConfigError)?;

        let sender = match self.sender {
            Some(sender) => sender,
            None => SenderBuilder::build(config.clone())?,
        };

        Ok(GmailTransport {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            config,
            sender,
        })
    }
}
