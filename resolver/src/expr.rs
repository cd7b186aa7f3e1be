//! The generic expression tree consumed by the resolver.
//!
//! This is the shape the external grammar engine hands over: untyped
//! operator applications over literals, attribute paths, and ranges.
//! The resolver is the only consumer; nothing here is validated.

use varia_core::ComponentKind;

/// A parsed expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal boolean parameter.
    Bool(bool),
    /// Literal integer parameter.
    Int(i64),
    /// Operator application: a grammar keyword plus ordered
    /// sub-parameters.
    Operator { kind: String, parameters: Vec<Expr> },
    /// Attribute-path leaf: a required root-type tag plus the
    /// dot-delimited path already split into segments.
    Value {
        root: ComponentKind,
        path: Vec<String>,
    },
    /// Cardinality range with verbatim bounds.
    Range { minimum: i64, maximum: i64 },
}

impl Expr {
    /// Build an operator application.
    pub fn operator(kind: impl Into<String>, parameters: Vec<Expr>) -> Self {
        Expr::Operator {
            kind: kind.into(),
            parameters,
        }
    }

    /// Build an attribute-path leaf.
    pub fn value<I, S>(root: ComponentKind, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Expr::Value {
            root,
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a range leaf.
    pub fn range(minimum: i64, maximum: i64) -> Self {
        Expr::Range { minimum, maximum }
    }
}
