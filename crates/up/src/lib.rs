#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod value;

#[cfg(feature = "json")]
pub mod json;

pub use crate::error::{Error, Result};
pub use crate::options::{DEFAULT_MAX_DEPTH, Options};
pub use crate::value::{Document, Node, Table, Value};

use std::io::Read;

/// Parses a UP document with default options.
pub fn parse(input: &str) -> Result<Document> {
    crate::decode::parser::parse_document(input, &Options::default())
}

pub fn parse_with_options(input: &str, options: &Options) -> Result<Document> {
    crate::decode::parser::parse_document(input, options)
}

/// Reads the source to the end and parses it. Bytes that are not valid
/// UTF-8 surface as [`Error::Encoding`] before any parsing happens.
pub fn parse_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Document> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    let text = String::from_utf8(buf)?;
    parse_with_options(&text, options)
}

/// Serializes a document to canonical UP text.
pub fn encode_to_string(doc: &Document) -> String {
    crate::encode::encode_document(doc)
}
