//! Text-to-tree decoding: line scanning and the single-pass parser.

pub mod parser;
pub mod scanner;

// Grammar sigils, fixed by the UP language specification.
pub(crate) const COMMENT: char = '#';
pub(crate) const ANNOTATION: char = '!';
pub(crate) const BLOCK_OPEN: &str = "{";
pub(crate) const BLOCK_CLOSE: &str = "}";
pub(crate) const LIST_OPEN: &str = "[";
pub(crate) const LIST_CLOSE: &str = "]";
pub(crate) const TABLE_MARK: &str = "|";
pub(crate) const FENCE: &str = "```";
