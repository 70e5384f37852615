//! # Error
//!
//! Module dedicated to Gmail transport errors. It contains an
//! [`Error`] enum based on [`thiserror::Error`] and a type alias
//! [`Result`].

use std::{io, string::FromUtf8Error};

use reqwest::StatusCode;
use thiserror::Error;

/// The global `Result` alias of the library.
pub type Result<T> = std::result::Result<T, Error>;

/// The global `Error` enum of the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot build gmail transport: configuration is not defined")]
    BuildTransportMissingConfigError,
    #[error("cannot build gmail transport: missing or empty OAuth 2.0 access token")]
    BuildTransportMissingAuthError,
    #[error("cannot read raw message chunk")]
    ReadMessageChunkError(#[source] io::Error),
    #[error("cannot decode raw message as utf-8")]
    DecodeRawMessageError(#[source] FromUtf8Error),
    #[error("cannot send request to gmail api")]
    SendRequestError(#[source] reqwest::Error),
    #[error("cannot parse gmail api send message response")]
    ParseSendResponseError(#[source] reqwest::Error),
    #[error("cannot send message via gmail api: {0}: {1}")]
    SendMessageStatusError(StatusCode, String),
    #[error("cannot write raw message to diagnostic output")]
    WriteRawMessageError(#[source] io::Error),
}
