//! Resolver error types.

use thiserror::Error;

/// Result type for resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur while resolving an expression tree.
///
/// Every variant is a hard failure: resolution is all-or-nothing per
/// top-level call, with no partial results and no default substitution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A value did not fit where the expression put it: the root-type
    /// tag of a path does not match the context entity, or an operand
    /// falls outside its operator's domain.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A path segment was reached while the current value was already
    /// missing.
    #[error("broken path: segment `{segment}` reached through a missing value")]
    BrokenPath { segment: String },

    /// Operator keyword not present in any category table.
    #[error("unknown operator: `{keyword}`")]
    UnknownOperator { keyword: String },
}

impl ResolveError {
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn broken_path(segment: impl Into<String>) -> Self {
        Self::BrokenPath {
            segment: segment.into(),
        }
    }

    pub fn unknown_operator(keyword: impl Into<String>) -> Self {
        Self::UnknownOperator {
            keyword: keyword.into(),
        }
    }
}
