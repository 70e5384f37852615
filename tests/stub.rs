use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

use bytes::Bytes;
use futures::stream;
use gmail_api::{GmailConfig, GmailTransport, GmailTransportBuilder, SendMode, StubSender};

/// Writer keeping its output observable after being moved into the
/// stub sender.
#[derive(Clone, Default)]
struct SharedWriter(Arc<Mutex<Vec<u8>>>);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test_log::test(tokio::test)]
async fn stub_writes_raw_message_and_resolves_with_no_result() {
    let output = SharedWriter::default();

    let transport = GmailTransportBuilder::new()
        .with_config(GmailConfig {
            send_mode: SendMode::Stub,
            ..Default::default()
        })
        .with_sender(Box::new(StubSender::from_writer(output.clone())))
        .build()
        .unwrap();

    let message = stream::iter([
        Ok::<_, io::Error>(Bytes::from_static(b"Subject: Hi\r\n\r\n")),
        Ok(Bytes::from_static(b"Body")),
    ]);

    let res = transport.send(message).await.unwrap();

    assert_eq!(res, None);
    assert_eq!(
        String::from_utf8(output.0.lock().unwrap().clone()).unwrap(),
        "Subject: Hi\r\n\r\nBody\n",
    );
}

#[test_log::test(tokio::test)]
async fn stub_mode_is_selected_from_config() {
    let transport = GmailTransport::new(GmailConfig {
        send_mode: SendMode::Stub,
        ..Default::default()
    })
    .unwrap();

    let message = stream::iter([Ok::<_, io::Error>(Bytes::from_static(b"Hello"))]);

    // the default stub writes to stdout, only the result matters here
    let res = transport.send(message).await.unwrap();

    assert_eq!(res, None);
}
