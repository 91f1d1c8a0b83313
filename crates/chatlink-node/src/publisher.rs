//! Node-side publisher: local events in, encoded frames out.

use std::sync::Arc;

use bytes::Bytes;

use chatlink_core::error::Result;
use chatlink_core::protocol::{
    ChatMessage, Mail, PrivateMessage, PrivateMessageAck, RelayMessage, CHANNEL_NAME,
};

/// Outbound channel from this node to the proxy. Implemented by the host;
/// sends are fire-and-forget and may be dropped by the transport.
pub trait Transport: Send + Sync {
    fn send(&self, channel: &str, frame: Bytes) -> bool;
}

/// Encodes relay messages and hands them to the transport.
///
/// Stateless: encoding is pure data transformation, so a `Publisher` shared
/// behind an `Arc` is safe to call from event handlers dispatched off the
/// main simulation thread.
pub struct Publisher {
    transport: Arc<dyn Transport>,
    channel: String,
}

impl Publisher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_channel(transport, CHANNEL_NAME)
    }

    pub fn with_channel(transport: Arc<dyn Transport>, channel: impl Into<String>) -> Self {
        Self {
            transport,
            channel: channel.into(),
        }
    }

    /// Encode and send. Encoding failures surface as errors; a transport
    /// refusal is terminal for the message and only logged.
    pub fn publish(&self, msg: &RelayMessage) -> Result<()> {
        let frame = msg.encode()?;
        if !self.transport.send(&self.channel, frame) {
            tracing::debug!(kind = ?msg.kind(), "transport refused relay frame");
        }
        Ok(())
    }

    /// Publish a public chat line for rebroadcast to every node.
    pub fn send_chat(&self, sender_id: &str, sender_name: &str, content: &str) -> Result<()> {
        self.publish(&RelayMessage::Chat(ChatMessage {
            sender_id: sender_id.to_string(),
            sender_name: sender_name.to_string(),
            content: content.to_string(),
        }))
    }

    /// Publish a direct message for delivery to the recipient's node.
    pub fn send_private_message(
        &self,
        sender_id: &str,
        sender_name: &str,
        recipient_id: &str,
        content: &str,
        nonce: i32,
    ) -> Result<()> {
        self.publish(&RelayMessage::Private(PrivateMessage {
            sender_id: sender_id.to_string(),
            sender_name: sender_name.to_string(),
            recipient_id: recipient_id.to_string(),
            content: content.to_string(),
            nonce,
        }))
    }

    /// Acknowledge a received private message back to its sender's node.
    pub fn send_private_message_ack(&self, sender_id: &str, nonce: i32) -> Result<()> {
        self.publish(&RelayMessage::PrivateAck(PrivateMessageAck {
            sender_id: sender_id.to_string(),
            nonce,
        }))
    }

    /// Publish a mail notification for rebroadcast to every node.
    pub fn send_mail(
        &self,
        sender_id: &str,
        sender_name: &str,
        recipient_id: &str,
        content: &str,
    ) -> Result<()> {
        self.publish(&RelayMessage::Mail(Mail {
            sender_id: sender_id.to_string(),
            sender_name: sender_name.to_string(),
            recipient_id: recipient_id.to_string(),
            content: content.to_string(),
        }))
    }
}
