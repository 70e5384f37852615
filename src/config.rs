//! Module dedicated to the Gmail API transport configuration.
//!
//! This module contains the configuration specific to the Gmail API
//! transport, including the authentication part.

/// The base URL of the Gmail REST API.
pub const GMAIL_DEFAULT_ENDPOINT: &str = "https://gmail.googleapis.com/gmail/v1";

/// The user id sentinel referring to the authenticated account.
pub const GMAIL_USER_ID_ME: &str = "me";

/// The Gmail API transport configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub struct GmailConfig {
    /// The Gmail authentication configuration.
    ///
    /// The transport authenticates with an already-authorized OAuth
    /// 2.0 access token. Acquiring and refreshing tokens is not
    /// managed by this library.
    #[cfg_attr(feature = "derive", serde(default))]
    pub auth: GmailAuthConfig,

    /// The Gmail user id.
    ///
    /// Defaults to the `"me"` sentinel, which refers to the account
    /// the access token was issued for.
    pub user_id: Option<String>,

    /// The Gmail REST API base URL.
    ///
    /// Defaults to [`GMAIL_DEFAULT_ENDPOINT`]. Overriding it is
    /// mostly useful for testing against a local server.
    pub endpoint: Option<String>,

    /// The send mode of the transport.
    ///
    /// See [`SendMode`].
    #[cfg_attr(feature = "derive", serde(default))]
    pub send_mode: SendMode,
}

impl GmailConfig {
    /// Returns the configured user id, or the `"me"` sentinel.
    pub fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or(GMAIL_USER_ID_ME)
    }

    /// Returns the configured API base URL, or the default Gmail one.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(GMAIL_DEFAULT_ENDPOINT)
    }

    /// Returns the access token, if defined and non-empty.
    pub fn access_token(&self) -> Option<&str> {
        match &self.auth {
            GmailAuthConfig::AccessToken(token) if !token.is_empty() => Some(token),
            _ => None,
        }
    }
}

/// The Gmail authentication configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum GmailAuthConfig {
    /// No authentication defined.
    ///
    /// Building a live transport from such a configuration fails.
    #[default]
    None,

    /// An authorized OAuth 2.0 access token.
    AccessToken(String),
}

/// The send mode of the Gmail transport.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SendMode {
    /// Messages are sent via the Gmail REST API.
    #[default]
    Live,

    /// Messages are written to a diagnostic output instead of being
    /// sent. Useful for environments without live credentials.
    Stub,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_defaults_to_me() {
        let config = GmailConfig::default();
        assert_eq!(config.user_id(), "me");

        let config = GmailConfig {
            user_id: Some("alice@localhost".into()),
            ..Default::default()
        };
        assert_eq!(config.user_id(), "alice@localhost");
    }

    #[test]
    fn endpoint_defaults_to_gmail_api() {
        let config = GmailConfig::default();
        assert_eq!(config.endpoint(), "https://gmail.googleapis.com/gmail/v1");
    }

    #[test]
    fn empty_access_token_counts_as_undefined() {
        let config = GmailConfig {
            auth: GmailAuthConfig::AccessToken(String::new()),
            ..Default::default()
        };
        assert_eq!(config.access_token(), None);

        let config = GmailConfig {
            auth: GmailAuthConfig::AccessToken("token".into()),
            ..Default::default()
        };
        assert_eq!(config.access_token(), Some("token"));
    }
}
