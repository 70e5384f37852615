//! Module dedicated to the live Gmail API sender.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, trace};

use super::{SendMessageRequest, SendMessageResponse, SendRawMessage};
use crate::{Error, GmailConfig, Result};

/// The live sender.
///
/// Sends the raw message via the Gmail REST API send message
/// endpoint, authenticated with the configured access token.
#[derive(Debug)]
pub struct HttpSender {
    /// The Gmail transport configuration.
    config: Arc<GmailConfig>,

    /// The access token extracted from the configuration.
    access_token: String,

    /// The HTTP client used to perform calls.
    client: Client,
}

impl HttpSender {
    /// Creates a new live sender from the given configuration.
    ///
    /// Fails if the configuration has no usable access token: a live
    /// sender cannot authenticate without one.
    pub fn new(config: Arc<GmailConfig>) -> Result<Self> {
        let access_token = config
            .access_token()
            .ok_or(Error::BuildTransportMissingAuthError)?
            .to_owned();

        Ok(Self {
            config,
            access_token,
            client: Client::new(),
        })
    }

    /// Builds the URL of the send message endpoint.
    pub fn send_message_url(&self) -> String {
        format!(
            "{}/users/{}/messages/send",
            self.config.endpoint().trim_end_matches('/'),
            self.config.user_id(),
        )
    }
}

#[async_trait]
impl SendRawMessage for HttpSender {
    async fn send_raw_message(&self, raw_message: &str) -> Result<Option<SendMessageResponse>> {
        let url = self.send_message_url();
        let request = SendMessageRequest::new(raw_message);

        debug!("sending raw message to {url}");
        trace!("raw message payload: {}", request.raw);

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await
            .map_err(Error::SendRequestError)?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(Error::SendMessageStatusError(status, body));
        }

        let res = res.json().await.map_err(Error::ParseSendResponseError)?;
        Ok(Some(res))
    }
}

#[cfg(test)]
mod tests {
    use crate::GmailAuthConfig;

    use super::*;

    fn sender(config: GmailConfig) -> HttpSender {
        HttpSender::new(Arc::new(config)).unwrap()
    }

    #[test]
    fn send_message_url_defaults_to_me() {
        let sender = sender(GmailConfig {
            auth: GmailAuthConfig::AccessToken("token".into()),
            ..Default::default()
        });

        assert_eq!(
            sender.send_message_url(),
            "https://gmail.googleapis.com/gmail/v1/users/me/messages/send",
        );
    }

    #[test]
    fn send_message_url_uses_overrides() {
        let sender = sender(GmailConfig {
            auth: GmailAuthConfig::AccessToken("token".into()),
            user_id: Some("alice@localhost".into()),
            endpoint: Some("http://localhost:8080/gmail/v1/".into()),
            ..Default::default()
        });

        assert_eq!(
            sender.send_message_url(),
            "http://localhost:8080/gmail/v1/users/alice@localhost/messages/send",
        );
    }

    #[test]
    fn new_fails_without_access_token() {
        let err = HttpSender::new(Arc::new(GmailConfig::default())).unwrap_err();
        assert!(matches!(err, Error::BuildTransportMissingAuthError));
    }
}
