//! varia constraint model
//!
//! The closed set of typed constraint-tree nodes the resolver produces
//! and a downstream solver consumes, plus the per-category operator
//! tables. This crate carries no behavior beyond keyword lookup.

mod constraint;
mod ops;

pub use constraint::*;
pub use ops::*;
