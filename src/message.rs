//! Module dedicated to raw message assembly and encoding.
//!
//! A composed message reaches the transport as an ordered, finite
//! stream of byte chunks. This module assembles those chunks into the
//! raw RFC 2822 string and encodes it the way the Gmail API expects.

use std::io;

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use bytes::Bytes;
use futures::{pin_mut, Stream, StreamExt};
use tracing::debug;

use crate::{Error, Result};

/// Reads the given message stream to its end and decodes the
/// accumulated bytes as a UTF-8 string.
///
/// Chunks are concatenated in arrival order. Decoding happens only
/// once the stream is fully consumed, so multi-byte characters split
/// across chunk boundaries are decoded correctly. A chunk-level error
/// short-circuits the accumulation.
pub async fn read_to_string(
    stream: impl Stream<Item = io::Result<Bytes>> + Send,
) -> Result<String> {
    let mut chunks = Vec::new();
    let mut chunklen = 0;

    pin_mut!(stream);

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(Error::ReadMessageChunkError)?;
        chunklen += chunk.len();
        chunks.push(chunk);
    }

    debug!("read {} raw message chunks ({chunklen} bytes)", chunks.len());

    // chunklen pre-sizes the concatenation, it has no semantic
    // effect.
    let mut buf = Vec::with_capacity(chunklen);
    for chunk in chunks {
        buf.extend_from_slice(&chunk);
    }

    String::from_utf8(buf).map_err(Error::DecodeRawMessageError)
}

/// Encodes the given raw message string as URL-safe base64.
///
/// The Gmail API expects standard base64 with `+` and `/` substituted
/// by `-` and `_`. Padding is kept as is.
pub fn encode_url_safe(raw_message: &str) -> String {
    BASE64_STANDARD
        .encode(raw_message.as_bytes())
        .replace('+', "-")
        .replace('/', "_")
}
