//! The feature-model graph aggregate.

use crate::index::ConnectionIndex;
use std::collections::HashMap;
use std::rc::Rc;
use varia_core::{ComponentId, Connection, Node};

/// The indexed aggregate of all nodes and connections.
///
/// Holds the authoritative ordered sequences plus four derived indices:
/// by node id, by connection id, by source node id, and by destination
/// node id. Indices are updated on every `add_*` call, never lazily, so
/// they are never stale relative to the last successful add. The graph
/// is add-only; nothing is ever removed.
#[derive(Debug, Default)]
pub struct MGraph {
    nodes: Vec<Rc<Node>>,
    connections: Vec<Rc<Connection>>,
    node_table: HashMap<ComponentId, Rc<Node>>,
    connection_table: HashMap<ComponentId, Rc<Connection>>,
    source_index: ConnectionIndex,
    destination_index: ConnectionIndex,
}

impl MGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and index it by id.
    ///
    /// No uniqueness check: a later node with a duplicate id silently
    /// overwrites the index entry while the sequence keeps both.
    pub fn add_node(&mut self, node: Rc<Node>) {
        self.node_table.insert(node.id(), node.clone());
        self.nodes.push(node);
    }

    /// Append a connection and index it by id, source, and destinations.
    ///
    /// The duplicate check consults the source index, not the backing
    /// sequence: re-adding a connection already present in its source
    /// bucket skips the sequence append but still re-appends every index
    /// entry.
    pub fn add_connection(&mut self, connection: Rc<Connection>) {
        let source_id = connection.source().id();

        if !self.source_index.contains(source_id, &connection) {
            self.connections.push(connection.clone());
        }

        self.connection_table
            .insert(connection.id(), connection.clone());
        self.source_index.append(source_id, connection.clone());
        for destination in connection.destinations() {
            self.destination_index
                .append(destination.id(), connection.clone());
        }
    }

    /// Get a node by id.
    pub fn get_node(&self, id: ComponentId) -> Option<&Rc<Node>> {
        self.node_table.get(&id)
    }

    /// Get a connection by id.
    pub fn get_connection(&self, id: ComponentId) -> Option<&Rc<Connection>> {
        self.connection_table.get(&id)
    }

    /// The ordered connections whose source is the node with `id`.
    pub fn get_connections_from_source(&self, id: ComponentId) -> Option<&[Rc<Connection>]> {
        self.source_index.get(id)
    }

    /// The ordered connections having the node with `id` among their
    /// destinations.
    pub fn get_connections_from_destination(&self, id: ComponentId) -> Option<&[Rc<Connection>]> {
        self.destination_index.get(id)
    }

    /// The authoritative node sequence, in insertion order.
    pub fn nodes(&self) -> &[Rc<Node>] {
        &self.nodes
    }

    /// The authoritative connection sequence, in insertion order.
    pub fn connections(&self) -> &[Rc<Connection>] {
        &self.connections
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of connections in the graph.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}
