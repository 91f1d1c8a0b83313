#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chatlink_core::protocol::CHANNEL_NAME;
use chatlink_relay::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
relay:
  chanel: "typo:relay" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.relay.channel, CHANNEL_NAME);
    assert_eq!(cfg.relay.max_payload_bytes, 65535);
}

#[test]
fn unsupported_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn payload_cap_must_stay_within_frame_limit() {
    for bad in [
        "version: 1\nrelay:\n  max_payload_bytes: 0\n",
        "version: 1\nrelay:\n  max_payload_bytes: 70000\n",
    ] {
        let err = config::load_from_str(bad).expect_err("must fail");
        assert_eq!(err.code().as_str(), "BAD_CONFIG");
    }
}

#[test]
fn empty_channel_rejected() {
    let err = config::load_from_str("version: 1\nrelay:\n  channel: \"\"\n")
        .expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}
