//! chatlink node: the backend-server-side half of the cross-node chat relay.
//!
//! The [`publisher::Publisher`] turns local chat, private-message, ack, and
//! mail events into encoded frames and hands them to the host transport; the
//! [`dispatch::InboundDispatcher`] decodes frames arriving from the proxy and
//! fans them out to the host's [`dispatch::EventSink`] for local re-emission.

pub mod dispatch;
pub mod publisher;

pub use dispatch::{EventSink, InboundDispatcher};
pub use publisher::{Publisher, Transport};
