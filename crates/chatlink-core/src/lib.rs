//! chatlink core: transport-agnostic relay protocol primitives and error types.
//!
//! This crate defines the wire-level contracts and error surface shared by the
//! node-side publisher and the proxy-side relay router. It intentionally
//! carries no transport or runtime dependencies so either process role can
//! embed it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ChatLinkError`/`Result` so a malformed
//! frame from one node can never crash the proxy or another node.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{ChatLinkError, Result};
