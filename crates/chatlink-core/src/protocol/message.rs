//! Message registry: the closed set of relay message kinds and their payloads.
//!
//! Wire ordinals are pinned explicitly: adding a kind means appending a new
//! numbered entry, never reordering. Changing an existing ordinal is a
//! protocol version bump.
//!
//! Targeted kinds carry their routing identity in the payload itself
//! (`PRIVATE_MESSAGE` has an explicit `recipient_id` field), so the router
//! needs no side-channel to resolve the destination node.

use bytes::Bytes;

use crate::error::Result;
use crate::protocol::frame::{decode_frame, encode_frame};
use crate::protocol::wire::{FieldReader, FieldWriter};

/// How the proxy forwards a kind: to every node, or to the one node hosting
/// a specific player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Broadcast,
    Targeted,
}

/// Closed, ordinal-indexed enumeration of relay message kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum MessageKind {
    /// Public chat line, rebroadcast to every node.
    Message = 0,
    /// Direct message, delivered to the recipient's node.
    PrivateMessage = 1,
    /// Delivery ack, returned to the original sender's node.
    PrivateMessageAck = 2,
    /// Offline mail, rebroadcast to every node.
    Mail = 3,
}

impl MessageKind {
    /// Wire ordinal of this kind.
    pub fn ordinal(self) -> u16 {
        self as u16
    }

    /// Resolve a wire ordinal. `None` for ordinals outside the registry.
    pub fn from_ordinal(ordinal: u16) -> Option<Self> {
        match ordinal {
            0 => Some(MessageKind::Message),
            1 => Some(MessageKind::PrivateMessage),
            2 => Some(MessageKind::PrivateMessageAck),
            3 => Some(MessageKind::Mail),
            _ => None,
        }
    }

    /// Delivery policy for this kind.
    pub fn delivery(self) -> Delivery {
        match self {
            MessageKind::Message | MessageKind::Mail => Delivery::Broadcast,
            MessageKind::PrivateMessage | MessageKind::PrivateMessageAck => Delivery::Targeted,
        }
    }
}

/// Public chat line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender_id: String,
    pub sender_name: String,
    pub content: String,
}

impl ChatMessage {
    fn write_payload(&self, w: &mut FieldWriter) -> Result<()> {
        w.put_str(&self.sender_id)?;
        w.put_str(&self.sender_name)?;
        w.put_str(&self.content)
    }

    fn read_payload(r: &mut FieldReader) -> Result<Self> {
        Ok(Self {
            sender_id: r.get_str()?,
            sender_name: r.get_str()?,
            content: r.get_str()?,
        })
    }
}

/// Direct message. `recipient_id` doubles as the routing target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateMessage {
    pub sender_id: String,
    pub sender_name: String,
    pub recipient_id: String,
    pub content: String,
    /// Caller-supplied correlation value echoed back in the ack.
    pub nonce: i32,
}

impl PrivateMessage {
    fn write_payload(&self, w: &mut FieldWriter) -> Result<()> {
        w.put_str(&self.sender_id)?;
        w.put_str(&self.sender_name)?;
        w.put_str(&self.recipient_id)?;
        w.put_str(&self.content)?;
        w.put_i32(self.nonce);
        Ok(())
    }

    fn read_payload(r: &mut FieldReader) -> Result<Self> {
        Ok(Self {
            sender_id: r.get_str()?,
            sender_name: r.get_str()?,
            recipient_id: r.get_str()?,
            content: r.get_str()?,
            nonce: r.get_i32()?,
        })
    }
}

/// Delivery ack for a private message. `sender_id` is the identity of the
/// original sender, whose node receives the ack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateMessageAck {
    pub sender_id: String,
    pub nonce: i32,
}

impl PrivateMessageAck {
    fn write_payload(&self, w: &mut FieldWriter) -> Result<()> {
        w.put_str(&self.sender_id)?;
        w.put_i32(self.nonce);
        Ok(())
    }

    fn read_payload(r: &mut FieldReader) -> Result<Self> {
        Ok(Self {
            sender_id: r.get_str()?,
            nonce: r.get_i32()?,
        })
    }
}

/// Offline mail notification, broadcast so the recipient's node (wherever
/// they are, or whenever they next connect) can surface it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mail {
    pub sender_id: String,
    pub sender_name: String,
    pub recipient_id: String,
    pub content: String,
}

impl Mail {
    fn write_payload(&self, w: &mut FieldWriter) -> Result<()> {
        w.put_str(&self.sender_id)?;
        w.put_str(&self.sender_name)?;
        w.put_str(&self.recipient_id)?;
        w.put_str(&self.content)
    }

    fn read_payload(r: &mut FieldReader) -> Result<Self> {
        Ok(Self {
            sender_id: r.get_str()?,
            sender_name: r.get_str()?,
            recipient_id: r.get_str()?,
            content: r.get_str()?,
        })
    }
}

/// A decoded relay message of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayMessage {
    Chat(ChatMessage),
    Private(PrivateMessage),
    PrivateAck(PrivateMessageAck),
    Mail(Mail),
}

impl RelayMessage {
    pub fn kind(&self) -> MessageKind {
        match self {
            RelayMessage::Chat(_) => MessageKind::Message,
            RelayMessage::Private(_) => MessageKind::PrivateMessage,
            RelayMessage::PrivateAck(_) => MessageKind::PrivateMessageAck,
            RelayMessage::Mail(_) => MessageKind::Mail,
        }
    }

    /// Identity used for targeted routing; `None` for broadcast kinds.
    ///
    /// Agrees with `kind().delivery()`: exactly the targeted kinds return
    /// `Some`.
    pub fn target(&self) -> Option<&str> {
        match self {
            RelayMessage::Chat(_) | RelayMessage::Mail(_) => None,
            RelayMessage::Private(m) => Some(&m.recipient_id),
            RelayMessage::PrivateAck(m) => Some(&m.sender_id),
        }
    }

    /// Serialize into a complete frame.
    pub fn encode(&self) -> Result<Bytes> {
        let mut w = FieldWriter::new();
        match self {
            RelayMessage::Chat(m) => m.write_payload(&mut w)?,
            RelayMessage::Private(m) => m.write_payload(&mut w)?,
            RelayMessage::PrivateAck(m) => m.write_payload(&mut w)?,
            RelayMessage::Mail(m) => m.write_payload(&mut w)?,
        }
        encode_frame(self.kind(), &w.finish())
    }

    /// Deserialize a complete frame.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let (kind, payload) = decode_frame(Bytes::copy_from_slice(bytes))?;
        let mut r = FieldReader::new(payload);
        Ok(match kind {
            MessageKind::Message => RelayMessage::Chat(ChatMessage::read_payload(&mut r)?),
            MessageKind::PrivateMessage => {
                RelayMessage::Private(PrivateMessage::read_payload(&mut r)?)
            }
            MessageKind::PrivateMessageAck => {
                RelayMessage::PrivateAck(PrivateMessageAck::read_payload(&mut r)?)
            }
            MessageKind::Mail => RelayMessage::Mail(Mail::read_payload(&mut r)?),
        })
    }
}
