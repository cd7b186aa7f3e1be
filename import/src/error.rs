//! Import error types.

use thiserror::Error;
use uuid::Uuid;
use varia_core::StoreError;

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Errors that can occur while importing a feature-model document.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The document is not valid JSON or does not match the expected
    /// shape.
    #[error("malformed feature-model document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A relationship references an element id the document never
    /// declares.
    #[error("relationship references unknown element {id}")]
    UnknownElement { id: Uuid },

    /// A property value has no attribute-value mapping.
    #[error("unsupported property value: {value}")]
    UnsupportedProperty { value: String },

    /// Entity construction rejected the converted attributes.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ImportError {
    pub fn unknown_element(id: Uuid) -> Self {
        Self::UnknownElement { id }
    }

    pub fn unsupported_property(value: impl Into<String>) -> Self {
        Self::UnsupportedProperty {
            value: value.into(),
        }
    }
}
