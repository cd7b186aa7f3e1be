//! varia import adapter
//!
//! Converts an externally-described JSON feature model into graph store
//! construction calls: each element becomes a validated node, each
//! relationship a validated connection whose source and destinations are
//! looked up among the nodes built so far. The core crates do not depend
//! on this adapter.

mod document;
mod error;

pub use document::{ElementDoc, FeatureDocument, RelationshipDoc};
pub use error::{ImportError, ImportResult};

use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::rc::Rc;
use varia_core::{attrs, ComponentId, Connection, Node, Value};
use varia_graph::MGraph;

/// Parse a JSON feature-model document and build the graph it describes.
pub fn import_document(input: &str) -> ImportResult<MGraph> {
    let document: FeatureDocument = serde_json::from_str(input)?;
    build_graph(document)
}

/// Build a graph from an already-parsed document.
///
/// Elements are added first, in document order, so relationships can
/// reference any element regardless of position.
pub fn build_graph(document: FeatureDocument) -> ImportResult<MGraph> {
    let mut graph = MGraph::new();

    for element in document.elements {
        let mut attributes = attrs! {
            "id" => ComponentId::new(element.id),
            "name" => element.name,
        };
        merge_properties(&mut attributes, element.properties)?;
        graph.add_node(Rc::new(Node::new(attributes)?));
    }

    for relationship in document.relationships {
        let source = lookup_node(&graph, relationship.source_id)?;

        let mut destinations = Vec::with_capacity(relationship.target_ids.len());
        for target_id in &relationship.target_ids {
            destinations.push(Value::Node(lookup_node(&graph, *target_id)?));
        }

        let mut attributes = attrs! {
            "id" => ComponentId::new(relationship.id),
        };
        attributes.insert("source".to_string(), Value::Node(source));
        attributes.insert("destinations".to_string(), Value::List(destinations));
        if let Some(kind) = relationship.kind {
            attributes.insert("type".to_string(), Value::Str(kind));
        }
        if let Some(minimum) = relationship.minimum {
            attributes.insert("minimum".to_string(), Value::Int(minimum));
        }
        if let Some(maximum) = relationship.maximum {
            attributes.insert("maximum".to_string(), Value::Int(maximum));
        }
        merge_properties(&mut attributes, relationship.properties)?;

        graph.add_connection(Rc::new(Connection::new(attributes)?));
    }

    Ok(graph)
}

fn lookup_node(graph: &MGraph, id: uuid::Uuid) -> ImportResult<Rc<Node>> {
    graph
        .get_node(ComponentId::new(id))
        .cloned()
        .ok_or_else(|| ImportError::unknown_element(id))
}

fn merge_properties(
    attributes: &mut varia_core::Attributes,
    properties: HashMap<String, JsonValue>,
) -> ImportResult<()> {
    for (key, value) in properties {
        attributes.insert(key, convert(value)?);
    }
    Ok(())
}

/// Map a JSON property value onto an attribute value.
fn convert(value: JsonValue) -> ImportResult<Value> {
    match value {
        JsonValue::Null => Ok(Value::Missing),
        JsonValue::Bool(b) => Ok(Value::Bool(b)),
        JsonValue::Number(number) => {
            if let Some(i) = number.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(f) = number.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err(ImportError::unsupported_property(number.to_string()))
            }
        }
        JsonValue::String(s) => Ok(Value::Str(s)),
        JsonValue::Array(items) => {
            let mut converted = Vec::with_capacity(items.len());
            for item in items {
                converted.push(convert(item)?);
            }
            Ok(Value::List(converted))
        }
        JsonValue::Object(map) => {
            let mut converted = HashMap::with_capacity(map.len());
            for (key, item) in map {
                converted.insert(key, convert(item)?);
            }
            Ok(Value::Map(converted))
        }
    }
}
