//! Publisher frame shape tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::{Arc, Mutex};

use bytes::Bytes;

use chatlink_core::error::ChatLinkError;
use chatlink_core::protocol::{MessageKind, RelayMessage, CHANNEL_NAME};
use chatlink_node::{Publisher, Transport};

#[derive(Default)]
struct RecordingTransport {
    sent: Mutex<Vec<(String, Bytes)>>,
    refuse: bool,
}

impl Transport for RecordingTransport {
    fn send(&self, channel: &str, frame: Bytes) -> bool {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((channel.to_string(), frame));
        }
        !self.refuse
    }
}

fn sent(transport: &RecordingTransport) -> Vec<(String, Bytes)> {
    transport.sent.lock().unwrap().clone()
}

#[test]
fn chat_goes_out_on_the_relay_channel() {
    let transport = Arc::new(RecordingTransport::default());
    let publisher = Publisher::new(Arc::clone(&transport) as Arc<dyn Transport>);

    publisher.send_chat("u1", "Steve", "hi").unwrap();

    let frames = sent(&transport);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].0, CHANNEL_NAME);
    let msg = RelayMessage::decode(&frames[0].1).unwrap();
    assert_eq!(msg.kind(), MessageKind::Message);
}

#[test]
fn private_message_carries_recipient_and_nonce() {
    let transport = Arc::new(RecordingTransport::default());
    let publisher = Publisher::new(Arc::clone(&transport) as Arc<dyn Transport>);

    publisher
        .send_private_message("u1", "Steve", "u2", "hey", -3)
        .unwrap();

    let frames = sent(&transport);
    match RelayMessage::decode(&frames[0].1).unwrap() {
        RelayMessage::Private(m) => {
            assert_eq!(m.sender_id, "u1");
            assert_eq!(m.recipient_id, "u2");
            assert_eq!(m.nonce, -3);
        }
        other => panic!("expected private message, got {other:?}"),
    }
}

#[test]
fn custom_channel_tag_is_used_verbatim() {
    let transport = Arc::new(RecordingTransport::default());
    let publisher = Publisher::with_channel(
        Arc::clone(&transport) as Arc<dyn Transport>,
        "acme:chat",
    );

    publisher.send_mail("u1", "Steve", "u2", "yo").unwrap();
    assert_eq!(sent(&transport)[0].0, "acme:chat");
}

#[test]
fn encode_failure_surfaces_and_nothing_is_sent() {
    let transport = Arc::new(RecordingTransport::default());
    let publisher = Publisher::new(Arc::clone(&transport) as Arc<dyn Transport>);

    let huge = "x".repeat(70_000);
    match publisher.send_chat("u1", "Steve", &huge) {
        Err(ChatLinkError::PayloadTooLarge(_)) => {}
        other => panic!("expected PayloadTooLarge, got {other:?}"),
    }
    assert!(sent(&transport).is_empty());
}

#[test]
fn transport_refusal_is_not_an_error() {
    let transport = Arc::new(RecordingTransport {
        sent: Mutex::new(Vec::new()),
        refuse: true,
    });
    let publisher = Publisher::new(Arc::clone(&transport) as Arc<dyn Transport>);

    // fire-and-forget: a dropped send is terminal for the message, not an Err
    publisher.send_private_message_ack("u1", 7).unwrap();
}
