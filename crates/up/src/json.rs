//! Conversion of a parsed document to `serde_json::Value`.
//!
//! This is where type annotations finally mean something: the parser
//! carries them opaquely, and the conversion coerces `!int`, `!float` and
//! `!bool` scalars into native JSON values. A scalar whose text does not
//! parse under its annotation stays a string rather than failing, since
//! annotations are hints, not a schema.

use serde_json::{Map, Value as Json};

use crate::value::{Document, Node, Table, Value};

pub fn document_to_json(doc: &Document) -> Json {
    nodes_to_json(&doc.nodes)
}

pub fn value_to_json(value: &Value, annotation: Option<&str>) -> Json {
    match value {
        Value::Scalar(s) => scalar_to_json(s, annotation),
        Value::Multiline(s) => Json::String(s.clone()),
        Value::Block(nodes) => nodes_to_json(nodes),
        Value::List(items) => Json::Array(items.iter().map(|v| value_to_json(v, None)).collect()),
        Value::Table(table) => table_to_json(table),
    }
}

fn nodes_to_json(nodes: &[Node]) -> Json {
    let mut map = Map::new();
    for node in nodes {
        // First occurrence wins, mirroring Document's first-match lookup.
        if !map.contains_key(&node.key) {
            map.insert(
                node.key.clone(),
                value_to_json(&node.value, node.type_annotation.as_deref()),
            );
        }
    }
    Json::Object(map)
}

fn table_to_json(table: &Table) -> Json {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            for (column, field) in table.columns.iter().zip(row) {
                obj.insert(column.clone(), Json::String(field.clone()));
            }
            Json::Object(obj)
        })
        .collect();
    Json::Array(rows)
}

fn scalar_to_json(s: &str, annotation: Option<&str>) -> Json {
    match annotation {
        Some("int") => {
            if let Ok(i) = s.parse::<i64>() {
                return Json::Number(i.into());
            }
            Json::String(s.to_string())
        }
        Some("float") => {
            if let Some(n) = s.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
                return Json::Number(n);
            }
            Json::String(s.to_string())
        }
        Some("bool") => match s {
            "true" => Json::Bool(true),
            "false" => Json::Bool(false),
            _ => Json::String(s.to_string()),
        },
        _ => Json::String(s.to_string()),
    }
}
