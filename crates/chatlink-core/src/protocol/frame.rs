//! Frame envelope: `u16` type ordinal | `u16` payload length | payload.
//!
//! Decoding never reads past the declared payload length even if more bytes
//! are present in the buffer; the payload slice handed to the field reader is
//! exactly `payload_len` bytes.

use bytes::Buf;
use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use crate::error::{ChatLinkError, Result};
use crate::protocol::message::MessageKind;

/// Reserved channel tag identifying relay frames among possibly many logical
/// channels sharing the same transport. Frames tagged otherwise are ignored,
/// not rejected.
pub const CHANNEL_NAME: &str = "chatlink:relay";

/// Hard cap imposed by the u16 length field.
pub const MAX_PAYLOAD_BYTES: usize = u16::MAX as usize;

/// Serialize a frame. Fails with `PayloadTooLarge` rather than truncating a
/// payload that does not fit the u16 length field.
pub fn encode_frame(kind: MessageKind, payload: &[u8]) -> Result<Bytes> {
    if payload.len() > MAX_PAYLOAD_BYTES {
        return Err(ChatLinkError::PayloadTooLarge(payload.len()));
    }
    let mut buf = BytesMut::with_capacity(4 + payload.len());
    buf.put_u16(kind.ordinal());
    buf.put_u16(payload.len() as u16);
    buf.put_slice(payload);
    Ok(buf.freeze())
}

/// Deserialize a frame header and slice out its payload.
///
/// The ordinal is resolved against the message registry before the length is
/// read, so an unknown kind is reported as `UnknownMessageType` even when the
/// rest of the buffer is garbage. Trailing bytes beyond the declared length
/// are ignored.
pub fn decode_frame(mut buf: Bytes) -> Result<(MessageKind, Bytes)> {
    if buf.remaining() < 2 {
        return Err(ChatLinkError::UnexpectedEndOfData);
    }
    let ordinal = buf.get_u16();
    let kind =
        MessageKind::from_ordinal(ordinal).ok_or(ChatLinkError::UnknownMessageType(ordinal))?;

    if buf.remaining() < 2 {
        return Err(ChatLinkError::UnexpectedEndOfData);
    }
    let declared = buf.get_u16() as usize;
    if buf.remaining() < declared {
        return Err(ChatLinkError::FrameLengthMismatch {
            declared,
            actual: buf.remaining(),
        });
    }

    let payload = buf.copy_to_bytes(declared);
    Ok((kind, payload))
}
