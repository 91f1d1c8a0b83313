use std::sync::RwLock;

use bytes::Bytes;
use dashmap::DashMap;
use tokio::sync::mpsc;

/// One player's outbound queue sender.
#[derive(Clone)]
pub struct Connection {
    pub tx: mpsc::Sender<Bytes>,
}

/// Snapshot of one node: its id plus connected players in connection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeView {
    pub node_id: String,
    pub players: Vec<String>,
}

/// Read-only view of the proxy's player/node mapping.
///
/// The surrounding proxy platform owns the lifecycle (entries appear on
/// player connect, disappear on disconnect); the router only queries it.
pub trait NodeRegistry: Send + Sync {
    /// Nodes in registration order, each with players in connection order.
    fn nodes(&self) -> Vec<NodeView>;

    /// Fire-and-forget send of an encoded frame to one player's connection.
    fn send_to_player(&self, player_id: &str, frame: Bytes) -> bool;
}

/// In-memory registry:
/// - ordered node/player bookkeeping (iteration order is part of the routing
///   contract, so it lives in a `Vec`, not the map)
/// - `player_id -> Connection` for sends
#[derive(Default)]
pub struct InMemoryRegistry {
    order: RwLock<Vec<NodeEntry>>,
    connections: DashMap<String, Connection>,
}

struct NodeEntry {
    node_id: String,
    players: Vec<String>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self {
            order: RwLock::new(Vec::new()),
            connections: DashMap::new(),
        }
    }

    /// Register a node (idempotent). Nodes keep their registration order.
    pub fn register_node(&self, node_id: &str) {
        if let Ok(mut order) = self.order.write() {
            if order.iter().all(|n| n.node_id != node_id) {
                order.push(NodeEntry {
                    node_id: node_id.to_string(),
                    players: Vec::new(),
                });
            }
        }
    }

    /// Attach a player connection to a node. The first connection registered
    /// for an identity wins; a duplicate identity on another node is a
    /// misconfiguration and its sender is ignored.
    pub fn connect(&self, node_id: &str, player_id: &str, tx: mpsc::Sender<Bytes>) {
        self.connections
            .entry(player_id.to_string())
            .or_insert(Connection { tx });

        if let Ok(mut order) = self.order.write() {
            match order.iter_mut().find(|n| n.node_id == node_id) {
                Some(node) => {
                    if !node.players.iter().any(|p| p == player_id) {
                        node.players.push(player_id.to_string());
                    }
                }
                None => order.push(NodeEntry {
                    node_id: node_id.to_string(),
                    players: vec![player_id.to_string()],
                }),
            }
        }
    }

    /// Drop a player connection from every node it appears on.
    pub fn disconnect(&self, player_id: &str) {
        self.connections.remove(player_id);
        if let Ok(mut order) = self.order.write() {
            for node in order.iter_mut() {
                node.players.retain(|p| p != player_id);
            }
        }
    }
}

impl NodeRegistry for InMemoryRegistry {
    fn nodes(&self) -> Vec<NodeView> {
        match self.order.read() {
            Ok(order) => order
                .iter()
                .map(|n| NodeView {
                    node_id: n.node_id.clone(),
                    players: n.players.clone(),
                })
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    fn send_to_player(&self, player_id: &str, frame: Bytes) -> bool {
        match self.connections.get(player_id) {
            Some(conn) => conn.tx.try_send(frame).is_ok(),
            None => false,
        }
    }
}
