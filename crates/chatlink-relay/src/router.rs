//! Relay router: decode an inbound frame, re-encode, and forward it.
//!
//! The inbound boundary is `handle_frame`. No error crosses it back into the
//! host transport's dispatch loop: a malformed frame from one node is logged
//! and dropped without affecting other nodes. The router owns no mutable
//! state; concurrent invocations only share the read-only registry.

use std::sync::Arc;

use bytes::Bytes;

use chatlink_core::error::{ChatLinkError, Result};
use chatlink_core::protocol::RelayMessage;

use crate::config::RelayConfig;
use crate::obs::RelayMetrics;
use crate::registry::NodeRegistry;

pub struct RelayRouter {
    registry: Arc<dyn NodeRegistry>,
    channel: String,
    max_payload_bytes: usize,
    metrics: Arc<RelayMetrics>,
}

impl RelayRouter {
    pub fn new(registry: Arc<dyn NodeRegistry>, cfg: &RelayConfig) -> Self {
        Self {
            registry,
            channel: cfg.relay.channel.clone(),
            max_payload_bytes: cfg.relay.max_payload_bytes,
            metrics: Arc::new(RelayMetrics::new()),
        }
    }

    pub fn metrics(&self) -> Arc<RelayMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Entry point wired to the host transport's inbound event.
    ///
    /// Frames tagged for another channel are not this protocol's concern and
    /// are ignored without error. Everything else is decoded and routed; all
    /// failures are absorbed here.
    pub fn handle_frame(&self, channel: &str, bytes: &[u8]) {
        if channel != self.channel {
            tracing::trace!(%channel, "frame for another channel, ignoring");
            return;
        }
        self.metrics.frames_received.inc();

        let msg = match self.decode_checked(bytes) {
            Ok(msg) => msg,
            Err(e) => {
                self.metrics
                    .decode_failures
                    .inc_label(&[("code", e.code().as_str())]);
                tracing::warn!(error = %e, "dropping malformed relay frame");
                return;
            }
        };

        // Re-encode once, send N times.
        let frame = match msg.encode() {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!(error = %e, "failed to re-encode relay frame");
                return;
            }
        };

        match msg.target() {
            None => {
                let reached = self.broadcast(&frame);
                tracing::debug!(kind = ?msg.kind(), reached, "rebroadcast frame to nodes");
            }
            Some(target) => {
                if let Err(e) = self.deliver_targeted(target, &frame) {
                    self.metrics.unroutable_targets.inc();
                    tracing::warn!(kind = ?msg.kind(), %target, error = %e, "targeted frame not delivered");
                }
            }
        }
    }

    fn decode_checked(&self, bytes: &[u8]) -> Result<RelayMessage> {
        // Cheap length guard before the full decode: an operator-configured
        // cap below the u16 framing limit rejects size bombs early.
        if let [_, _, hi, lo, ..] = bytes {
            let declared = u16::from_be_bytes([*hi, *lo]) as usize;
            if declared > self.max_payload_bytes {
                return Err(ChatLinkError::PayloadTooLarge(declared));
            }
        }
        RelayMessage::decode(bytes)
    }

    /// Send `frame` once to every node with at least one connected player.
    ///
    /// The transport addresses a node via one of its connected players, so
    /// the send goes to each node's first player; a node with zero players
    /// is unreachable and silently skipped. Returns the number of nodes
    /// addressed.
    pub fn broadcast(&self, frame: &Bytes) -> usize {
        let mut reached = 0;
        for node in self.registry.nodes() {
            let Some(representative) = node.players.first() else {
                tracing::trace!(node = %node.node_id, "node has no connected players, skipping");
                continue;
            };
            if !self.registry.send_to_player(representative, frame.clone()) {
                tracing::debug!(node = %node.node_id, "send to node representative failed");
            }
            self.metrics.broadcast_sends.inc();
            reached += 1;
        }
        reached
    }

    /// Send `frame` to the one node currently hosting `target`.
    ///
    /// Nodes are scanned in registration order and players in connection
    /// order; the first match wins and scanning stops, so even a duplicated
    /// identity receives at most one copy. With no match anywhere, reports
    /// `TargetNotFound`; the player may simply have disconnected between the
    /// event firing and the relay processing it.
    pub fn deliver_targeted(&self, target: &str, frame: &Bytes) -> Result<()> {
        for node in self.registry.nodes() {
            for player in &node.players {
                if player == target {
                    if !self.registry.send_to_player(player, frame.clone()) {
                        tracing::debug!(node = %node.node_id, %target, "targeted send failed");
                    }
                    self.metrics.targeted_sends.inc();
                    return Ok(());
                }
            }
        }
        Err(ChatLinkError::TargetNotFound(target.to_string()))
    }
}
