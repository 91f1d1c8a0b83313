//! Frame vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use serde_json::json;

use chatlink_core::protocol::RelayMessage;

mod vector_loader;
use vector_loader::TestVector;

fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

fn to_json(msg: &RelayMessage) -> serde_json::Value {
    match msg {
        RelayMessage::Chat(m) => json!({
            "kind": 0,
            "sender_id": m.sender_id,
            "sender_name": m.sender_name,
            "content": m.content,
        }),
        RelayMessage::Private(m) => json!({
            "kind": 1,
            "sender_id": m.sender_id,
            "sender_name": m.sender_name,
            "recipient_id": m.recipient_id,
            "content": m.content,
            "nonce": m.nonce,
        }),
        RelayMessage::PrivateAck(m) => json!({
            "kind": 2,
            "sender_id": m.sender_id,
            "nonce": m.nonce,
        }),
        RelayMessage::Mail(m) => json!({
            "kind": 3,
            "sender_id": m.sender_id,
            "sender_name": m.sender_name,
            "recipient_id": m.recipient_id,
            "content": m.content,
        }),
    }
}

#[test]
fn frame_vectors() {
    let files = [
        "chat_message_ok.json",
        "private_message_ok.json",
        "ack_ok.json",
        "mail_ok.json",
        "trailing_bytes_ignored.json",
        "unknown_kind.json",
        "header_too_short.json",
        "length_mismatch.json",
        "truncated_string_field.json",
        "bad_utf8_field.json",
    ];

    for f in files {
        let v = load(f);
        let raw = v.frame.decode();
        let res = RelayMessage::decode(&raw);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let msg = res.expect("expected ok frame");
        let ex = v.expect.expect("missing expect block");
        assert_eq!(to_json(&msg), ex, "vector={}", v.description);
    }
}
