use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),

    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("nesting depth limit ({limit}) exceeded at line {line}")]
    DepthExceeded { line: usize, limit: usize },
}

impl Error {
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
