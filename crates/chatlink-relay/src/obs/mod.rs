//! Relay observability: counters rendered in Prometheus text format.

pub mod metrics;

pub use metrics::{Counter, CounterVec, RelayMetrics};
