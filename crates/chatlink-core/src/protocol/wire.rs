//! Payload field primitives (panic-free).
//!
//! Parsing rules: never index into raw buffers, always go through `Buf`
//! with `remaining()` checks, and no `unwrap()` / `expect()` / `panic!()`
//! in production paths.

use bytes::Buf;
use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use crate::error::{ChatLinkError, Result};

/// Sequential payload builder. Fields are appended in the per-kind order
/// fixed by the message registry.
#[derive(Debug, Default)]
pub struct FieldWriter {
    buf: BytesMut,
}

impl FieldWriter {
    pub fn new() -> Self {
        Self {
            buf: BytesMut::new(),
        }
    }

    /// Append a length-prefixed UTF-8 string field.
    /// Fails with `PayloadTooLarge` if the string does not fit the u16 prefix.
    pub fn put_str(&mut self, s: &str) -> Result<()> {
        let raw = s.as_bytes();
        if raw.len() > u16::MAX as usize {
            return Err(ChatLinkError::PayloadTooLarge(raw.len()));
        }
        self.buf.put_u16(raw.len() as u16);
        self.buf.put_slice(raw);
        Ok(())
    }

    /// Append a signed 32-bit field (big-endian).
    pub fn put_i32(&mut self, v: i32) {
        self.buf.put_i32(v);
    }

    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }
}

/// Sequential reader over a payload slice.
///
/// The reader only ever sees the slice the frame decoder produced, so it
/// cannot read past the declared payload length regardless of what trails
/// the frame in the transport buffer.
#[derive(Debug)]
pub struct FieldReader {
    buf: Bytes,
}

impl FieldReader {
    pub fn new(payload: Bytes) -> Self {
        Self { buf: payload }
    }

    /// Read a length-prefixed UTF-8 string field.
    pub fn get_str(&mut self) -> Result<String> {
        if self.buf.remaining() < 2 {
            return Err(ChatLinkError::UnexpectedEndOfData);
        }
        let len = self.buf.get_u16() as usize;
        if self.buf.remaining() < len {
            return Err(ChatLinkError::UnexpectedEndOfData);
        }
        let raw = self.buf.copy_to_bytes(len);
        String::from_utf8(raw.to_vec()).map_err(|_| ChatLinkError::InvalidUtf8)
    }

    /// Read a signed 32-bit field (big-endian).
    pub fn get_i32(&mut self) -> Result<i32> {
        if self.buf.remaining() < 4 {
            return Err(ChatLinkError::UnexpectedEndOfData);
        }
        Ok(self.buf.get_i32())
    }

    /// Bytes left unread in the payload.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }
}
