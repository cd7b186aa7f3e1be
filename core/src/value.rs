//! Value types for component attributes.
//!
//! Attributes are open-ended: a value can be a scalar, an id token, a
//! reference to another component, a nested mapping, or an ordered
//! sequence of any of these. `Missing` is the sentinel an absent key
//! resolves to during path walks.

use crate::{ComponentId, Connection, Node};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A value that can be stored in a component attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent-key sentinel.
    Missing,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Identity token.
    Id(ComponentId),
    /// Shared reference to a node.
    Node(Rc<Node>),
    /// Shared reference to a connection.
    Connection(Rc<Connection>),
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// Nested attribute mapping.
    Map(HashMap<String, Value>),
}

impl Value {
    /// Returns true if this is the missing sentinel.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as string reference if this is a Str value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as id token if this is an Id value.
    pub fn as_id(&self) -> Option<ComponentId> {
        match self {
            Value::Id(id) => Some(*id),
            _ => None,
        }
    }

    /// Get as node reference if this is a Node value.
    pub fn as_node(&self) -> Option<&Rc<Node>> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Get as connection reference if this is a Connection value.
    pub fn as_connection(&self) -> Option<&Rc<Connection>> {
        match self {
            Value::Connection(connection) => Some(connection),
            _ => None,
        }
    }

    /// Get as value slice if this is a List value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Missing => "Missing",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Str(_) => "Str",
            Value::Id(_) => "Id",
            Value::Node(_) => "Node",
            Value::Connection(_) => "Connection",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => write!(f, "missing"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Id(id) => write!(f, "#{}", id),
            Value::Node(node) => write!(f, "node:{}", node.id()),
            Value::Connection(connection) => write!(f, "connection:{}", connection.id()),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(_) => write!(f, "{{..}}"),
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<ComponentId> for Value {
    fn from(id: ComponentId) -> Self {
        Value::Id(id)
    }
}

impl From<Rc<Node>> for Value {
    fn from(node: Rc<Node>) -> Self {
        Value::Node(node)
    }
}

impl From<Rc<Connection>> for Value {
    fn from(connection: Rc<Connection>) -> Self {
        Value::Connection(connection)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<Rc<Node>>> for Value {
    fn from(nodes: Vec<Rc<Node>>) -> Self {
        Value::List(nodes.into_iter().map(Value::Node).collect())
    }
}

/// Type alias for attribute storage.
pub type Attributes = std::collections::HashMap<String, Value>;

/// Helper macro to create attribute maps.
#[macro_export]
macro_rules! attrs {
    () => {
        std::collections::HashMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = std::collections::HashMap::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            map
        }
    };
}
