//! Splits raw input into numbered lines.
//!
//! Classification stays minimal on purpose: whether a line is an entry, a
//! closer or a table row depends on parser context, and the body of a
//! multiline fence must survive verbatim (a `#` line in there is content,
//! not a comment).

use crate::decode::COMMENT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based source line number, for error reporting.
    pub number: usize,
    /// Line content without the trailing newline (or `\r\n`).
    pub raw: &'a str,
}

impl<'a> Line<'a> {
    pub fn trimmed(&self) -> &'a str {
        self.raw.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    pub fn is_comment(&self) -> bool {
        self.raw.trim_start().starts_with(COMMENT)
    }

    /// Blank and comment lines never produce nodes outside a fence.
    pub fn is_skippable(&self) -> bool {
        self.is_blank() || self.is_comment()
    }
}

pub fn scan(input: &str) -> Vec<Line<'_>> {
    iter(input).collect()
}

pub fn iter(input: &str) -> LineIter<'_> {
    LineIter {
        rest: input,
        number: 0,
    }
}

pub struct LineIter<'a> {
    rest: &'a str,
    number: usize,
}

impl<'a> Iterator for LineIter<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let raw = match self.rest.find('\n') {
            Some(pos) => {
                let (line, remaining) = self.rest.split_at(pos + 1);
                self.rest = remaining;
                line.trim_end_matches('\n').trim_end_matches('\r')
            }
            None => {
                let line = self.rest;
                self.rest = "";
                line
            }
        };
        self.number += 1;
        Some(Line {
            number: self.number,
            raw,
        })
    }
}
