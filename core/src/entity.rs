//! Entity structures for varia.
//!
//! Nodes and connections are the two component types of a feature-model
//! graph. Both are constructed from an open attribute mapping through a
//! validating constructor and are immutable afterwards; sharing happens
//! through `Rc`, so a node referenced by several connections (and by the
//! graph index) is always the same allocation.

use crate::{Attributes, ComponentId, StoreError, StoreResult, Value};
use std::fmt;
use std::rc::Rc;

/// A feature-model vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: ComponentId,
    attributes: Attributes,
}

impl Node {
    /// Validate an attribute mapping and construct a node from it.
    ///
    /// The mapping must carry an `id` entry holding an id token; every
    /// other entry is kept verbatim.
    pub fn new(attributes: Attributes) -> StoreResult<Self> {
        let id = match attributes.get("id") {
            Some(Value::Id(id)) => *id,
            Some(other) => {
                return Err(StoreError::invalid_entity(
                    "node",
                    format!("`id` must be an id token, got {}", other.type_name()),
                ))
            }
            None => return Err(StoreError::invalid_entity("node", "missing `id` attribute")),
        };

        Ok(Self { id, attributes })
    }

    /// The identity token recorded at construction.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Get an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// The full attribute mapping.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// A directed edge from one source node to an ordered, non-empty set of
/// destination nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    id: ComponentId,
    source: Rc<Node>,
    destinations: Vec<Rc<Node>>,
    attributes: Attributes,
}

impl Connection {
    /// Validate an attribute mapping and construct a connection from it.
    ///
    /// Required entries: `id` (id token), `source` (node), `destinations`
    /// (non-empty sequence of nodes, checked element-wise in iteration
    /// order). On success the derived `destination` entry is set to the
    /// first destination.
    pub fn new(mut attributes: Attributes) -> StoreResult<Self> {
        let id = match attributes.get("id") {
            Some(Value::Id(id)) => *id,
            Some(other) => {
                return Err(StoreError::invalid_entity(
                    "connection",
                    format!("`id` must be an id token, got {}", other.type_name()),
                ))
            }
            None => {
                return Err(StoreError::invalid_entity(
                    "connection",
                    "missing `id` attribute",
                ))
            }
        };

        let source = match attributes.get("source") {
            Some(Value::Node(node)) => node.clone(),
            Some(other) => {
                return Err(StoreError::invalid_entity(
                    "connection",
                    format!("`source` must be a node, got {}", other.type_name()),
                ))
            }
            None => {
                return Err(StoreError::invalid_entity(
                    "connection",
                    "missing `source` attribute",
                ))
            }
        };

        let destinations = match attributes.get("destinations") {
            Some(Value::List(items)) => {
                let mut nodes = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::Node(node) => nodes.push(node.clone()),
                        other => {
                            return Err(StoreError::invalid_entity(
                                "connection",
                                format!(
                                    "`destinations` must contain only nodes, got {}",
                                    other.type_name()
                                ),
                            ))
                        }
                    }
                }
                if nodes.is_empty() {
                    return Err(StoreError::invalid_entity(
                        "connection",
                        "`destinations` must not be empty",
                    ));
                }
                nodes
            }
            Some(other) => {
                return Err(StoreError::invalid_entity(
                    "connection",
                    format!("`destinations` must be a sequence, got {}", other.type_name()),
                ))
            }
            None => {
                return Err(StoreError::invalid_entity(
                    "connection",
                    "missing `destinations` attribute",
                ))
            }
        };

        attributes.insert(
            "destination".to_string(),
            Value::Node(destinations[0].clone()),
        );

        Ok(Self {
            id,
            source,
            destinations,
            attributes,
        })
    }

    /// The identity token recorded at construction.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// The source node.
    pub fn source(&self) -> &Rc<Node> {
        &self.source
    }

    /// The ordered destination nodes.
    pub fn destinations(&self) -> &[Rc<Node>] {
        &self.destinations
    }

    /// Get an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// The full attribute mapping, including the derived `destination`.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// Discriminator for the two component variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Node,
    Connection,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Node => write!(f, "Node"),
            ComponentKind::Connection => write!(f, "Connection"),
        }
    }
}

/// A node or a connection; the context type expression resolution runs
/// against.
#[derive(Debug, Clone)]
pub enum Component {
    Node(Rc<Node>),
    Connection(Rc<Connection>),
}

impl Component {
    /// The runtime variant of this component.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Node(_) => ComponentKind::Node,
            Component::Connection(_) => ComponentKind::Connection,
        }
    }

    /// The identity token of the underlying component.
    pub fn id(&self) -> ComponentId {
        match self {
            Component::Node(node) => node.id(),
            Component::Connection(connection) => connection.id(),
        }
    }

    /// Wrap this component as an attribute value.
    pub fn to_value(&self) -> Value {
        match self {
            Component::Node(node) => Value::Node(node.clone()),
            Component::Connection(connection) => Value::Connection(connection.clone()),
        }
    }
}

impl From<Rc<Node>> for Component {
    fn from(node: Rc<Node>) -> Self {
        Component::Node(node)
    }
}

impl From<Rc<Connection>> for Component {
    fn from(connection: Rc<Connection>) -> Self {
        Component::Connection(connection)
    }
}
