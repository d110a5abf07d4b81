//! Canonical UP emission: the inverse of the parser, used by the CLI
//! formatter and the round-trip tests.
//!
//! Output is normalized: two-space indentation, block form for lists, a
//! single separator space after keys. Re-parsing the output yields a
//! structurally equal document.

pub mod writer;

use crate::value::{Document, Node, Table, Value};
use writer::LineWriter;

const INDENT: usize = 2;

pub fn encode_document(doc: &Document) -> String {
    let mut w = LineWriter::new();
    for node in &doc.nodes {
        write_node(node, &mut w, 0);
    }
    w.into_string()
}

fn write_node(node: &Node, w: &mut LineWriter, indent: usize) {
    let key = match &node.type_annotation {
        Some(ann) => format!("{}!{}", node.key, ann),
        None => node.key.clone(),
    };
    match &node.value {
        Value::Scalar(s) if s.is_empty() => w.line(indent, &key),
        Value::Scalar(s) => w.line_kv(indent, &key, s),
        Value::Block(nodes) => {
            w.line_kv(indent, &key, "{");
            for child in nodes {
                write_node(child, w, indent + INDENT);
            }
            w.line(indent, "}");
        }
        Value::List(items) => {
            w.line_kv(indent, &key, "[");
            for item in items {
                write_value(item, w, indent + INDENT);
            }
            w.line(indent, "]");
        }
        Value::Table(table) => {
            w.line_kv(indent, &key, "|");
            write_table_body(table, w, indent + INDENT);
            w.line(indent, "|");
        }
        Value::Multiline(s) => {
            w.line_kv(indent, &key, "```");
            write_fence_body(s, w, indent + INDENT);
            w.line(indent, "```");
        }
    }
}

/// Keyless value in list-element position; containers open on their own line.
fn write_value(value: &Value, w: &mut LineWriter, indent: usize) {
    match value {
        Value::Scalar(s) => w.line(indent, s),
        Value::Block(nodes) => {
            w.line(indent, "{");
            for child in nodes {
                write_node(child, w, indent + INDENT);
            }
            w.line(indent, "}");
        }
        Value::List(items) => {
            w.line(indent, "[");
            for item in items {
                write_value(item, w, indent + INDENT);
            }
            w.line(indent, "]");
        }
        Value::Table(table) => {
            w.line(indent, "|");
            write_table_body(table, w, indent + INDENT);
            w.line(indent, "|");
        }
        Value::Multiline(s) => {
            w.line(indent, "```");
            write_fence_body(s, w, indent + INDENT);
            w.line(indent, "```");
        }
    }
}

fn write_table_body(table: &Table, w: &mut LineWriter, indent: usize) {
    w.line(indent, &join_fields(&table.columns));
    for row in &table.rows {
        w.line(indent, &join_fields(row));
    }
}

/// Whitespace-joined when every field is a plain token, pipe-joined when a
/// field is empty or contains whitespace, so the emitted row splits back
/// into the same fields.
fn join_fields(fields: &[String]) -> String {
    let needs_pipe = fields
        .iter()
        .any(|f| f.is_empty() || f.chars().any(char::is_whitespace));
    if needs_pipe {
        fields.join(" | ")
    } else {
        fields.join(" ")
    }
}

/// Body lines are indented uniformly; the parser's dedent removes exactly
/// that prefix again. Blank lines stay blank.
fn write_fence_body(content: &str, w: &mut LineWriter, indent: usize) {
    for line in content.split('\n') {
        if line.is_empty() {
            w.blank();
        } else {
            w.line(indent, line);
        }
    }
}
