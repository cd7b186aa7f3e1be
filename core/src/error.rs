//! Common error types for the graph store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while constructing or storing graph entities.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A node or connection was constructed from an attribute mapping
    /// that violates its invariants (missing or mistyped `id`, `source`,
    /// or `destinations`).
    #[error("invalid {entity}: {reason}")]
    InvalidEntity { entity: &'static str, reason: String },
}

impl StoreError {
    pub fn invalid_entity(entity: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidEntity {
            entity,
            reason: reason.into(),
        }
    }
}
