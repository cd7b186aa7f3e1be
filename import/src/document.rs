//! The external feature-model document shape.
//!
//! Mirrors the JSON the modeling frontend exports: a named document with
//! a unique id, an ordered set of elements, and an ordered set of
//! relationships. Anything beyond the fixed fields rides along in
//! `properties` and is mapped verbatim onto entity attributes.

use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use uuid::Uuid;

/// A feature-model document.
#[derive(Debug, Deserialize)]
pub struct FeatureDocument {
    pub name: String,
    pub id: Uuid,
    pub elements: Vec<ElementDoc>,
    pub relationships: Vec<RelationshipDoc>,
}

/// A feature element; becomes one graph node.
#[derive(Debug, Deserialize)]
pub struct ElementDoc {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub properties: HashMap<String, JsonValue>,
}

/// A relationship between elements; becomes one graph connection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipDoc {
    pub id: Uuid,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub source_id: Uuid,
    pub target_ids: Vec<Uuid>,
    #[serde(default)]
    pub minimum: Option<i64>,
    #[serde(default)]
    pub maximum: Option<i64>,
    #[serde(default)]
    pub properties: HashMap<String, JsonValue>,
}
