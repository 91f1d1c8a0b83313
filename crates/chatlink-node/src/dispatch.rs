//! Inbound dispatch: frames from the proxy fanned out to host handlers.

use async_trait::async_trait;

use chatlink_core::protocol::{
    ChatMessage, Mail, PrivateMessage, PrivateMessageAck, RelayMessage, CHANNEL_NAME,
};

/// Host-side consumer of decoded relay messages, one handler per kind.
/// Implementations re-emit the event locally (show the chat line, resolve
/// the pending ack, and so on).
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn on_chat(&self, msg: ChatMessage);
    async fn on_private_message(&self, msg: PrivateMessage);
    async fn on_private_message_ack(&self, msg: PrivateMessageAck);
    async fn on_mail(&self, msg: Mail);
}

/// Decodes inbound frames and routes them to an [`EventSink`].
///
/// Same boundary discipline as the proxy-side router: frames for other
/// channels are ignored, malformed frames are logged and dropped, and no
/// error reaches the host's dispatch loop.
pub struct InboundDispatcher {
    channel: String,
}

impl Default for InboundDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl InboundDispatcher {
    pub fn new() -> Self {
        Self::with_channel(CHANNEL_NAME)
    }

    pub fn with_channel(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }

    pub async fn handle_frame(&self, sink: &dyn EventSink, channel: &str, bytes: &[u8]) {
        if channel != self.channel {
            tracing::trace!(%channel, "frame for another channel, ignoring");
            return;
        }
        let msg = match RelayMessage::decode(bytes) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::warn!(error = %e, "dropping malformed relay frame");
                return;
            }
        };
        match msg {
            RelayMessage::Chat(m) => sink.on_chat(m).await,
            RelayMessage::Private(m) => sink.on_private_message(m).await,
            RelayMessage::PrivateAck(m) => sink.on_private_message_ack(m).await,
            RelayMessage::Mail(m) => sink.on_mail(m).await,
        }
    }
}
