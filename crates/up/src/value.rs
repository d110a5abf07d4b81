//! The UP document tree: ordered nodes holding one of five value shapes.

/// A parsed value. The set of shapes is closed; consumers matching on a
/// `Value` handle all five or they don't compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Single-line string, uninterpreted.
    Scalar(String),
    /// Nested entries, insertion order preserved, duplicate keys kept.
    Block(Vec<Node>),
    /// Ordered, possibly heterogeneous elements.
    List(Vec<Value>),
    /// Header-declared columns with rectangular rows.
    Table(Table),
    /// Fenced string spanning multiple source lines, dedented.
    Multiline(String),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&[Node]> {
        match self {
            Value::Block(nodes) => Some(nodes),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_multiline(&self) -> Option<&str> {
        match self {
            Value::Multiline(s) => Some(s),
            _ => None,
        }
    }
}

/// Tabular value: the header fixes the schema once, every row carries one
/// field per declared column, in declared order. The parser rejects ragged
/// rows, so rectangularity holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Field of `row` under the named column, if both exist.
    pub fn field(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

/// One `key value` entry. The annotation is opaque metadata from a
/// `key!type` suffix; the parser never interprets or validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub key: String,
    pub type_annotation: Option<String>,
    pub value: Value,
}

/// An ordered sequence of top-level nodes.
///
/// Lookup is a deliberate linear scan with first-match semantics: duplicate
/// keys are legal, and an index would silently turn first-match into
/// last-write-wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// First node with the given key, any value shape.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.nodes.iter().find(|n| n.key == key).map(|n| &n.value)
    }

    /// First scalar-valued node with the given key.
    pub fn get_scalar(&self, key: &str) -> Option<&str> {
        self.find_with(key, Value::as_scalar)
    }

    /// First block-valued node with the given key.
    pub fn get_block(&self, key: &str) -> Option<&[Node]> {
        self.find_with(key, Value::as_block)
    }

    /// First list-valued node with the given key.
    pub fn get_list(&self, key: &str) -> Option<&[Value]> {
        self.find_with(key, Value::as_list)
    }

    fn find_with<'a, T: ?Sized>(
        &'a self,
        key: &str,
        cast: impl Fn(&'a Value) -> Option<&'a T>,
    ) -> Option<&'a T> {
        self.nodes
            .iter()
            .filter(|n| n.key == key)
            .find_map(|n| cast(&n.value))
    }
}
