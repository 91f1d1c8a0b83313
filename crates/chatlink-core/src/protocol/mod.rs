//! Relay wire protocol: field primitives, frame envelope, message registry.
//!
//! Layout on the wire (all integers big-endian):
//! - Frame: `u16` type ordinal | `u16` payload length | payload bytes.
//! - String field: `u16` byte length | UTF-8 bytes.
//! - Int field: `i32`.
//!
//! All parsers are panic-free: malformed input is reported as `ChatLinkError`
//! instead of panicking or indexing raw buffers, keeping the proxy resilient
//! to a misbehaving node.

pub mod frame;
pub mod message;
pub mod wire;

pub use frame::{decode_frame, encode_frame, CHANNEL_NAME, MAX_PAYLOAD_BYTES};
pub use message::{
    ChatMessage, Delivery, Mail, MessageKind, PrivateMessage, PrivateMessageAck, RelayMessage,
};
pub use wire::{FieldReader, FieldWriter};
