//! chatlink relay: the proxy-side half of the cross-node chat relay.
//!
//! This crate wires the node registry, the relay router, config, and metrics
//! into the piece the proxy process embeds: frames arrive from the host
//! transport via [`router::RelayRouter::handle_frame`], get decoded, and are
//! rebroadcast to every node or delivered to the one node hosting a specific
//! player.

pub mod config;
pub mod obs;
pub mod registry;
pub mod router;

pub use registry::{InMemoryRegistry, NodeRegistry, NodeView};
pub use router::RelayRouter;
