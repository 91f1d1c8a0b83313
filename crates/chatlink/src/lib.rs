//! Top-level facade crate for chatlink.
//!
//! Re-exports the protocol core and both process-role halves so hosts can
//! depend on a single crate.

pub mod core {
    pub use chatlink_core::*;
}

pub mod node {
    pub use chatlink_node::*;
}

pub mod relay {
    pub use chatlink_relay::*;
}
