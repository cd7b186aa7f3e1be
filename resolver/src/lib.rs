//! varia expression resolver
//!
//! Consumes the generic expression tree produced by the external grammar
//! engine plus one graph component as evaluation context, and builds the
//! typed constraint model tree, resolving symbolic attribute paths along
//! the way. Resolution is pure and side-effect free over an immutable
//! graph snapshot; every structural violation is a hard, synchronous
//! failure.

mod error;
mod expr;
mod resolver;

pub use error::{ResolveError, ResolveResult};
pub use expr::Expr;
pub use resolver::resolve;
