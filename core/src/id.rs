//! Identity tokens for varia components.
//!
//! Nodes and connections share a single 128-bit id space. Tokens are
//! assigned by the importing frontend and opaque to the store.

use std::fmt;
use uuid::Uuid;

/// Unique identifier for a node or a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(Uuid);

impl ComponentId {
    /// Create a ComponentId from a raw uuid.
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random id.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id from its canonical hyphenated form.
    pub fn parse(input: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(input).map(Self)
    }

    /// Get the raw uuid.
    pub fn raw(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ComponentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}
