//! Minimal metrics registry for the relay.
//!
//! No external metrics crate; counters are plain atomics, labeled counters
//! are backed by `DashMap` with label keys flattened into sorted vectors for
//! deterministic rendering order.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Unlabeled monotonic counter.
#[derive(Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    /// Increment by 1.
    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        let _ = writeln!(out, "{name} {}", self.get());
    }
}

/// Labeled monotonic counter.
#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1 for the given label set.
    pub fn inc_label(&self, labels: &[(&str, &str)]) {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();

        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Sum across all label sets.
    pub fn total(&self) -> u64 {
        self.map.iter().map(|r| r.value().load(Ordering::Relaxed)).sum()
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        for r in self.map.iter() {
            let key = r.key();
            let val = r.value().load(Ordering::Relaxed);
            let label_str = key
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let _ = writeln!(out, "{name}{{{label_str}}} {val}");
        }
    }
}

/// Counters the router maintains. The host scrapes `render()`.
#[derive(Default)]
pub struct RelayMetrics {
    /// Frames accepted on the relay channel (any outcome).
    pub frames_received: Counter,
    /// Frames dropped at the decode boundary, by error code.
    pub decode_failures: CounterVec,
    /// Per-node sends performed by broadcasts.
    pub broadcast_sends: Counter,
    /// Targeted deliveries that found their player.
    pub targeted_sends: Counter,
    /// Targeted deliveries with no matching connected player.
    pub unroutable_targets: Counter,
}

impl RelayMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all counters in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.frames_received
            .render("chatlink_relay_frames_received_total", &mut out);
        self.decode_failures
            .render("chatlink_relay_decode_failures_total", &mut out);
        self.broadcast_sends
            .render("chatlink_relay_broadcast_sends_total", &mut out);
        self.targeted_sends
            .render("chatlink_relay_targeted_sends_total", &mut out);
        self.unroutable_targets
            .render("chatlink_relay_unroutable_targets_total", &mut out);
        out
    }
}
