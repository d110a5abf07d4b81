//! Single-pass, line-oriented UP parser.
//!
//! A cursor walks the scanned lines top-down. Each entry line decides its
//! value shape from the remainder after the key: an opener sigil starts a
//! container consumed recursively, a fence starts a multiline string, and
//! anything else is a scalar. Every consumer leaves the cursor on the first
//! line it did not consume.
//!
//! The first structural violation aborts the whole parse; a half-built tree
//! is never returned.

use crate::decode::scanner::{Line, scan};
use crate::decode::{
    ANNOTATION, BLOCK_CLOSE, BLOCK_OPEN, FENCE, LIST_CLOSE, LIST_OPEN, TABLE_MARK,
};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::value::{Document, Node, Table, Value};

pub struct Parser<'a> {
    lines: Vec<Line<'a>>,
    idx: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, &Options::default())
    }

    pub fn with_options(input: &'a str, options: &Options) -> Self {
        Self {
            lines: scan(input),
            idx: 0,
            max_depth: options.max_depth,
        }
    }

    fn peek(&self) -> Option<Line<'a>> {
        self.lines.get(self.idx).copied()
    }

    pub fn parse_document(&mut self) -> Result<Document> {
        let mut nodes = Vec::new();
        while let Some(line) = self.peek() {
            if line.is_skippable() {
                self.idx += 1;
                continue;
            }
            let first = line.trimmed().chars().next();
            if let Some(c) = first.filter(|c| matches!(c, '}' | ']' | '|')) {
                return Err(Error::syntax(
                    line.number,
                    format!("unexpected '{c}' outside any container"),
                ));
            }
            nodes.push(self.parse_entry(0)?);
        }
        Ok(Document { nodes })
    }

    /// Parses one entry starting at the current line. `depth` is the
    /// nesting level of the container holding the entry.
    fn parse_entry(&mut self, depth: usize) -> Result<Node> {
        let line = self.lines[self.idx];
        let (key_token, rest) = split_entry(line.trimmed());
        let (key, type_annotation) = parse_key(key_token, line.number)?;
        self.idx += 1;
        let value = self.parse_value(rest, line.number, depth)?;
        Ok(Node {
            key,
            type_annotation,
            value,
        })
    }

    /// Value-shape dispatch on the remainder of an entry line. The entry
    /// line itself has already been consumed.
    fn parse_value(&mut self, rest: &str, entry_line: usize, depth: usize) -> Result<Value> {
        let t = rest.trim();
        if t.starts_with(FENCE) {
            // Anything after the fence is an info tag; it is not content.
            return Ok(Value::Multiline(self.parse_fence(entry_line)?));
        }
        match t {
            BLOCK_OPEN => return self.parse_block(depth + 1, entry_line),
            LIST_OPEN => return self.parse_list(depth + 1, entry_line),
            TABLE_MARK => return self.parse_table(depth + 1, entry_line),
            _ => {}
        }
        if is_inline_list(t) {
            return Ok(parse_inline_list(t));
        }
        if t.is_empty() {
            if let Some(v) = self.parse_standalone_opener(depth)? {
                return Ok(v);
            }
            // Bare key with no opener anywhere after it: a flag-style entry.
            return Ok(Value::Scalar(String::new()));
        }
        Ok(Value::Scalar(rest.to_string()))
    }

    /// A key with an empty remainder may take its container opener from the
    /// next non-skipped line. Leaves the cursor untouched when that line is
    /// not an opener.
    fn parse_standalone_opener(&mut self, depth: usize) -> Result<Option<Value>> {
        let mut probe = self.idx;
        while let Some(line) = self.lines.get(probe).copied() {
            if line.is_skippable() {
                probe += 1;
                continue;
            }
            let open_line = line.number;
            let value = match line.trimmed() {
                BLOCK_OPEN => {
                    self.idx = probe + 1;
                    self.parse_block(depth + 1, open_line)?
                }
                LIST_OPEN => {
                    self.idx = probe + 1;
                    self.parse_list(depth + 1, open_line)?
                }
                TABLE_MARK => {
                    self.idx = probe + 1;
                    self.parse_table(depth + 1, open_line)?
                }
                _ => return Ok(None),
            };
            return Ok(Some(value));
        }
        Ok(None)
    }

    fn parse_block(&mut self, depth: usize, open_line: usize) -> Result<Value> {
        self.check_depth(depth, open_line)?;
        let mut nodes = Vec::new();
        loop {
            let Some(line) = self.peek() else {
                return Err(Error::syntax(open_line, "unterminated block"));
            };
            if line.is_skippable() {
                self.idx += 1;
                continue;
            }
            let t = line.trimmed();
            if t == BLOCK_CLOSE {
                self.idx += 1;
                return Ok(Value::Block(nodes));
            }
            if t.starts_with(BLOCK_CLOSE) {
                return Err(Error::syntax(line.number, "trailing content after '}'"));
            }
            nodes.push(self.parse_entry(depth)?);
        }
    }

    /// Each list line is one value, keyless; nested containers are allowed.
    fn parse_list(&mut self, depth: usize, open_line: usize) -> Result<Value> {
        self.check_depth(depth, open_line)?;
        let mut items = Vec::new();
        loop {
            let Some(line) = self.peek() else {
                return Err(Error::syntax(open_line, "unterminated list"));
            };
            if line.is_skippable() {
                self.idx += 1;
                continue;
            }
            let t = line.trimmed();
            let line_no = line.number;
            if t == LIST_CLOSE {
                self.idx += 1;
                return Ok(Value::List(items));
            }
            if t.starts_with(LIST_CLOSE) {
                return Err(Error::syntax(line_no, "trailing content after ']'"));
            }
            if t.starts_with(BLOCK_CLOSE) {
                return Err(Error::syntax(line_no, "unexpected '}' in list"));
            }
            let item = match t {
                BLOCK_OPEN => {
                    self.idx += 1;
                    self.parse_block(depth + 1, line_no)?
                }
                LIST_OPEN => {
                    self.idx += 1;
                    self.parse_list(depth + 1, line_no)?
                }
                TABLE_MARK => {
                    self.idx += 1;
                    self.parse_table(depth + 1, line_no)?
                }
                _ if t.starts_with(FENCE) => {
                    self.idx += 1;
                    Value::Multiline(self.parse_fence(line_no)?)
                }
                _ if is_inline_list(t) => {
                    self.idx += 1;
                    parse_inline_list(t)
                }
                _ => {
                    self.idx += 1;
                    Value::Scalar(t.to_string())
                }
            };
            items.push(item);
        }
    }

    /// Header line fixes the columns; every row must match their count.
    fn parse_table(&mut self, depth: usize, open_line: usize) -> Result<Value> {
        self.check_depth(depth, open_line)?;
        let columns = loop {
            let Some(line) = self.peek() else {
                return Err(Error::syntax(open_line, "unterminated table"));
            };
            if line.is_skippable() {
                self.idx += 1;
                continue;
            }
            let t = line.trimmed();
            if t == TABLE_MARK {
                return Err(Error::syntax(line.number, "table is missing its header row"));
            }
            let columns = split_fields(t);
            if columns.iter().any(String::is_empty) {
                return Err(Error::syntax(line.number, "empty column name in table header"));
            }
            self.idx += 1;
            break columns;
        };
        let mut rows: Vec<Vec<String>> = Vec::new();
        loop {
            let Some(line) = self.peek() else {
                return Err(Error::syntax(open_line, "unterminated table"));
            };
            if line.is_skippable() {
                self.idx += 1;
                continue;
            }
            let t = line.trimmed();
            if t == TABLE_MARK {
                self.idx += 1;
                return Ok(Value::Table(Table { columns, rows }));
            }
            if t.starts_with(TABLE_MARK) {
                return Err(Error::syntax(line.number, "trailing content after '|'"));
            }
            let fields = split_fields(t);
            if fields.len() != columns.len() {
                return Err(Error::syntax(
                    line.number,
                    format!(
                        "table row has {} fields, expected {}",
                        fields.len(),
                        columns.len()
                    ),
                ));
            }
            self.idx += 1;
            rows.push(fields);
        }
    }

    /// Consumes fence body lines verbatim up to the closing fence, then
    /// strips the common leading-whitespace width from every line.
    fn parse_fence(&mut self, open_line: usize) -> Result<String> {
        let mut body: Vec<&'a str> = Vec::new();
        loop {
            let Some(line) = self.peek() else {
                return Err(Error::syntax(open_line, "unterminated multiline string"));
            };
            self.idx += 1;
            if line.trimmed() == FENCE {
                return Ok(dedent(&body));
            }
            body.push(line.raw);
        }
    }

    fn check_depth(&self, depth: usize, line: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::DepthExceeded {
                line,
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}

/// Splits an entry line into its key token and the remainder after a
/// single separator character.
fn split_entry(body: &str) -> (&str, &str) {
    match body.split_once(|c: char| c.is_whitespace()) {
        Some((key, rest)) => (key, rest),
        None => (body, ""),
    }
}

fn parse_key(token: &str, line: usize) -> Result<(String, Option<String>)> {
    if let Some(c) = token
        .chars()
        .find(|c| matches!(c, '{' | '}' | '[' | ']' | '|'))
    {
        return Err(Error::syntax(line, format!("unexpected '{c}' in key")));
    }
    match token.split_once(ANNOTATION) {
        None => Ok((token.to_string(), None)),
        Some((key, ann)) => {
            if key.is_empty() {
                return Err(Error::syntax(line, "empty key before type annotation"));
            }
            if ann.is_empty() {
                return Err(Error::syntax(line, "type annotation is missing its type token"));
            }
            if ann.contains(ANNOTATION) {
                return Err(Error::syntax(
                    line,
                    format!("malformed type annotation '{ann}'"),
                ));
            }
            Ok((key.to_string(), Some(ann.to_string())))
        }
    }
}

fn is_inline_list(t: &str) -> bool {
    t.len() >= 2 && t.starts_with(LIST_OPEN) && t.ends_with(LIST_CLOSE)
}

fn parse_inline_list(t: &str) -> Value {
    let inner = &t[1..t.len() - 1];
    if inner.trim().is_empty() {
        return Value::List(Vec::new());
    }
    Value::List(
        inner
            .split(',')
            .map(|item| Value::Scalar(item.trim().to_string()))
            .collect(),
    )
}

/// Row and header fields: pipe-delimited when the line contains a pipe,
/// whitespace-delimited otherwise. Pipe form allows fields with spaces.
fn split_fields(t: &str) -> Vec<String> {
    if t.contains('|') {
        t.split('|').map(|f| f.trim().to_string()).collect()
    } else {
        t.split_whitespace().map(str::to_string).collect()
    }
}

/// Strips the minimum leading-whitespace width of the non-blank lines from
/// every line. Mixed tabs and spaces are preserved beyond that width.
fn dedent(lines: &[&str]) -> String {
    let width = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| leading_ws(l))
        .min()
        .unwrap_or(0);
    let mut out = String::new();
    for (i, l) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let cut = leading_ws(l).min(width);
        out.push_str(&l[cut..]);
    }
    out
}

fn leading_ws(s: &str) -> usize {
    s.bytes().take_while(|b| matches!(b, b' ' | b'\t')).count()
}

pub fn parse_document(input: &str, options: &Options) -> Result<Document> {
    Parser::with_options(input, options).parse_document()
}
