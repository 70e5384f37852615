//! Module dedicated to the stub sender.

use std::{
    io::{self, Write},
    sync::Mutex,
};

use async_trait::async_trait;
use tracing::debug;

use super::{SendMessageResponse, SendRawMessage};
use crate::{Error, Result};

/// The diagnostic sender.
///
/// Writes the decoded raw message string to a diagnostic output
/// instead of sending it, then resolves with success and no result.
/// It never authenticates and never touches the network.
pub struct StubSender {
    /// The diagnostic output the raw message is written to.
    writer: Mutex<Box<dyn Write + Send>>,
}

impl StubSender {
    /// Creates a new stub sender writing to the standard output.
    pub fn new() -> Self {
        Self::from_writer(io::stdout())
    }

    /// Creates a new stub sender writing to the given writer.
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl Default for StubSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SendRawMessage for StubSender {
    async fn send_raw_message(&self, raw_message: &str) -> Result<Option<SendMessageResponse>> {
        debug!("writing raw message to diagnostic output instead of sending it");

        let mut writer = self.writer.lock().unwrap_or_else(|err| err.into_inner());
        writeln!(writer, "{raw_message}").map_err(Error::WriteRawMessageError)?;
        writer.flush().map_err(Error::WriteRawMessageError)?;

        Ok(None)
    }
}
