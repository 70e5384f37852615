#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![doc = include_str!("../README.md")]

pub use reqwest;

pub mod config;
mod error;
pub mod message;
pub mod sender;
pub mod transport;

#[doc(inline)]
pub use crate::{
    config::{GmailAuthConfig, GmailConfig, SendMode},
    error::{Error, Result},
    sender::{
        HttpSender, SendMessageRequest, SendMessageResponse, SendRawMessage, SenderBuilder,
        StubSender,
    },
    transport::{GmailTransport, GmailTransportBuilder},
};
