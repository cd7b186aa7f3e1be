//! Indices for connection lookups.

use std::collections::HashMap;
use std::rc::Rc;
use varia_core::{ComponentId, Connection};

/// Ordered connection buckets keyed by a node id.
///
/// Buckets are append-only: a present key always maps to a non-empty
/// list, so an absent key is distinguishable from an empty bucket.
#[derive(Debug, Default)]
pub struct ConnectionIndex {
    buckets: HashMap<ComponentId, Vec<Rc<Connection>>>,
}

impl ConnectionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a connection to the bucket for `id`.
    pub fn append(&mut self, id: ComponentId, connection: Rc<Connection>) {
        self.buckets.entry(id).or_default().push(connection);
    }

    /// The ordered bucket for `id`, if one exists.
    pub fn get(&self, id: ComponentId) -> Option<&[Rc<Connection>]> {
        self.buckets.get(&id).map(Vec::as_slice)
    }

    /// True if the bucket for `id` already holds this exact connection
    /// (identity, not structural equality).
    pub fn contains(&self, id: ComponentId, connection: &Rc<Connection>) -> bool {
        self.buckets
            .get(&id)
            .map_or(false, |bucket| bucket.iter().any(|c| Rc::ptr_eq(c, connection)))
    }
}
