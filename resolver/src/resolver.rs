//! Typed resolution of parsed expressions against a context component.
//!
//! Resolution turns an untyped [`Expr`] tree into a [`Constraint`] tree
//! in one recursive pass: operator keywords are dispatched through the
//! closed category tables, attribute paths are walked against the
//! context entity, and every materialized operand is checked against
//! its operator's domain. Any violation aborts the whole call.

use crate::error::{ResolveError, ResolveResult};
use crate::expr::Expr;
use varia_core::{Component, ComponentKind, Value};
use varia_model::{ArithmeticOp, Constraint, LogicOp, Param, RelationalOp, VariableKind};

/// Resolve a parsed expression tree into a constraint model tree.
///
/// `context` supplies the entity that attribute paths are rooted at.
/// The top-level expression must be an operator application or a range;
/// bare literals and paths are not constraint trees.
pub fn resolve(expr: &Expr, context: &Component) -> ResolveResult<Constraint> {
    match expr {
        Expr::Operator { kind, parameters } => resolve_operator(kind, parameters, context),
        Expr::Range { minimum, maximum } => Ok(Constraint::Range {
            minimum: *minimum,
            maximum: *maximum,
        }),
        Expr::Bool(_) | Expr::Int(_) => Err(ResolveError::type_mismatch(
            "a constraint expression",
            "a literal",
        )),
        Expr::Value { .. } => Err(ResolveError::type_mismatch(
            "a constraint expression",
            "an attribute path",
        )),
    }
}

/// Dispatch an operator keyword through the category tables.
///
/// Arity is never checked; operand types are.
fn resolve_operator(
    kind: &str,
    parameters: &[Expr],
    context: &Component,
) -> ResolveResult<Constraint> {
    if let Some(op) = LogicOp::from_keyword(kind) {
        let parameters = materialize(parameters, context)?;
        for parameter in &parameters {
            check_boolean_operand(op.keyword(), parameter)?;
        }
        return Ok(Constraint::Logic { op, parameters });
    }

    if let Some(op) = RelationalOp::from_keyword(kind) {
        let parameters = materialize(parameters, context)?;
        for parameter in &parameters {
            check_integer_operand(op.keyword(), parameter)?;
        }
        return Ok(Constraint::Relational { op, parameters });
    }

    if let Some(op) = ArithmeticOp::from_keyword(kind) {
        let parameters = materialize(parameters, context)?;
        for parameter in &parameters {
            check_integer_operand(op.keyword(), parameter)?;
        }
        return Ok(Constraint::Arithmetic { op, parameters });
    }

    if let Some(variable) = VariableKind::from_keyword(kind) {
        let parameters = materialize(parameters, context)?;
        for parameter in &parameters {
            check_variable_operand(variable.keyword(), parameter)?;
        }
        return Ok(Constraint::Variable {
            kind: variable,
            parameters,
        });
    }

    Err(ResolveError::unknown_operator(kind))
}

/// Materialize sub-parameters into resolved parameter slots.
///
/// Literals pass through unchanged; everything else resolves against the
/// same context. A path result that is a sequence is spliced element-wise
/// into the parent list: a path through a one-to-many relation yields one
/// slot per element, not a single nested sequence.
fn materialize(parameters: &[Expr], context: &Component) -> ResolveResult<Vec<Param>> {
    let mut out = Vec::with_capacity(parameters.len());

    for parameter in parameters {
        match parameter {
            Expr::Bool(value) => out.push(Param::Bool(*value)),
            Expr::Int(value) => out.push(Param::Int(*value)),
            Expr::Operator { kind, parameters } => {
                out.push(Param::Constraint(resolve_operator(
                    kind, parameters, context,
                )?));
            }
            Expr::Range { minimum, maximum } => {
                out.push(Param::Constraint(Constraint::Range {
                    minimum: *minimum,
                    maximum: *maximum,
                }));
            }
            Expr::Value { root, path } => match resolve_path(*root, path, context)? {
                Value::List(items) => {
                    for item in items {
                        out.push(leaf_param(item)?);
                    }
                }
                value => out.push(leaf_param(value)?),
            },
        }
    }

    Ok(out)
}

/// Walk an attribute path from the context component.
fn resolve_path(
    root: ComponentKind,
    path: &[String],
    context: &Component,
) -> ResolveResult<Value> {
    if root != context.kind() {
        return Err(ResolveError::type_mismatch(
            root.to_string(),
            context.kind().to_string(),
        ));
    }

    let mut current = context.to_value();
    for segment in path {
        current = step(current, segment)?;
    }
    Ok(current)
}

/// Resolve one path segment against the current value.
fn step(current: Value, segment: &str) -> ResolveResult<Value> {
    match current {
        Value::Node(node) => Ok(lookup(node.get(segment))),
        Value::Connection(connection) => Ok(lookup(connection.get(segment))),
        Value::Map(map) => Ok(map.get(segment).cloned().unwrap_or(Value::Missing)),
        Value::List(items) => {
            // Fan out across the sequence, order preserved. Elements that
            // carry no attribute mapping are dropped; an element-level
            // miss stays in place as Missing.
            let mut resolved = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Node(node) => resolved.push(lookup(node.get(segment))),
                    Value::Connection(connection) => resolved.push(lookup(connection.get(segment))),
                    Value::Map(map) => {
                        resolved.push(map.get(segment).cloned().unwrap_or(Value::Missing))
                    }
                    _ => {}
                }
            }
            Ok(Value::List(resolved))
        }
        Value::Missing => Err(ResolveError::broken_path(segment)),
        // Scalars are left untouched by remaining segments.
        scalar => Ok(scalar),
    }
}

fn lookup(value: Option<&Value>) -> Value {
    value.cloned().unwrap_or(Value::Missing)
}

/// Convert a resolved path leaf into a parameter slot.
fn leaf_param(value: Value) -> ResolveResult<Param> {
    match value {
        Value::Bool(b) => Ok(Param::Bool(b)),
        Value::Int(i) => Ok(Param::Int(i)),
        Value::Str(s) => Ok(Param::Str(s)),
        Value::Id(id) => Ok(Param::Id(id)),
        other => Err(ResolveError::type_mismatch(
            "a scalar attribute value",
            other.type_name(),
        )),
    }
}

fn check_boolean_operand(keyword: &str, parameter: &Param) -> ResolveResult<()> {
    let ok = matches!(
        parameter,
        Param::Bool(_) | Param::Constraint(Constraint::Logic { .. } | Constraint::Relational { .. })
    );
    if ok {
        Ok(())
    } else {
        Err(ResolveError::type_mismatch(
            format!("a boolean operand for `{}`", keyword),
            describe(parameter),
        ))
    }
}

fn check_integer_operand(keyword: &str, parameter: &Param) -> ResolveResult<()> {
    let ok = matches!(
        parameter,
        Param::Int(_) | Param::Constraint(Constraint::Arithmetic { .. })
    );
    if ok {
        Ok(())
    } else {
        Err(ResolveError::type_mismatch(
            format!("an integer operand for `{}`", keyword),
            describe(parameter),
        ))
    }
}

fn check_variable_operand(keyword: &str, parameter: &Param) -> ResolveResult<()> {
    let ok = matches!(
        parameter,
        Param::Bool(_)
            | Param::Int(_)
            | Param::Str(_)
            | Param::Id(_)
            | Param::Constraint(Constraint::Range { .. })
    );
    if ok {
        Ok(())
    } else {
        Err(ResolveError::type_mismatch(
            format!("a value or range operand for `{}`", keyword),
            describe(parameter),
        ))
    }
}

fn describe(parameter: &Param) -> &'static str {
    match parameter {
        Param::Bool(_) => "a boolean",
        Param::Int(_) => "an integer",
        Param::Str(_) => "a string",
        Param::Id(_) => "an id token",
        Param::Constraint(Constraint::Logic { .. }) => "a logic expression",
        Param::Constraint(Constraint::Relational { .. }) => "a relational expression",
        Param::Constraint(Constraint::Arithmetic { .. }) => "an arithmetic expression",
        Param::Constraint(Constraint::Variable { .. }) => "a variable declaration",
        Param::Constraint(Constraint::Range { .. }) => "a range",
    }
}
