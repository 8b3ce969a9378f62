//! Thrift IDL front end.
//!
//! The adapter only depends on the [`IdlParser`] trait and the
//! [`ast`] types, so another parser can be plugged in through
//! [`run_with`](crate::adapter::run_with).

pub mod ast;
pub mod parser;

use std::fmt;

use pest::error::LineColLocation;

pub use ast::{Document, Statement, StatementKind};
pub use parser::ThriftParser;

/// Turns IDL source text into a [`Document`].
pub trait IdlParser {
    /// Parse `source`, returning every syntax diagnostic on failure.
    fn parse(&self, source: &str) -> Result<Document, Vec<Diagnostic>>;
}

/// A syntax error reported by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Line number (1-indexed).
    pub line: usize,

    /// Column number (1-indexed).
    pub column: usize,

    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

impl<R: pest::RuleType> From<pest::error::Error<R>> for Diagnostic {
    fn from(err: pest::error::Error<R>) -> Self {
        let (line, column) = match err.line_col {
            LineColLocation::Pos(pos) => pos,
            LineColLocation::Span(start, _) => start,
        };
        Self::new(line, column, err.variant.message().into_owned())
    }
}
