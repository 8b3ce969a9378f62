//! Error types for the library.
//!
//! Every fatal condition of a run maps to one [`Error`] variant. Non-fatal
//! conditions are [`Warning`]s: they are logged and collected, and the
//! offending item is skipped.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::thrift::Diagnostic;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. Any of these aborts the run before output is produced.
#[derive(Debug, Error)]
pub enum Error {
    /// The IDL source is missing, unreadable, or empty.
    #[error("Failed to read IDL source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The parser reported syntax errors.
    #[error("Thrift parse errors in {}:\n{}", origin(.path.as_deref()), format_diagnostics(.diagnostics))]
    Parse {
        path: Option<PathBuf>,
        diagnostics: Vec<Diagnostic>,
    },

    /// Nothing to emit.
    #[error("No struct schemas to emit")]
    EmptyInput,
}

impl Error {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an I/O error for a source file with no content.
    pub fn empty_source(path: impl Into<PathBuf>) -> Self {
        Self::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, "file is empty"),
        )
    }

    /// Create a parse error from parser diagnostics.
    pub fn parse(path: Option<&Path>, diagnostics: Vec<Diagnostic>) -> Self {
        Self::Parse {
            path: path.map(Path::to_path_buf),
            diagnostics,
        }
    }
}

/// Non-fatal conditions met while adapting a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A top-level statement that is not a struct.
    UnsupportedStatement { kind: String, name: String },

    /// A field annotation without a value.
    UnsupportedAnnotation {
        structure: String,
        field: String,
        annotation: String,
    },

    /// A struct whose name is not a valid TypeScript identifier.
    InvalidStructName { name: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnsupportedStatement { kind, name } => {
                write!(f, "Unsupported thrift statement: {} {}", kind, name)
            }
            Warning::UnsupportedAnnotation {
                structure,
                field,
                annotation,
            } => write!(
                f,
                "Annotation {} on {}.{} has no value",
                annotation, structure, field
            ),
            Warning::InvalidStructName { name } => write!(
                f,
                "Struct name {} is not a valid TypeScript identifier, skipped",
                name
            ),
        }
    }
}

fn origin(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "<source>".to_string())
}

/// Format multiple diagnostics for display.
fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .enumerate()
        .map(|(i, d)| format!("  {}. {}", i + 1, d))
        .collect::<Vec<_>>()
        .join("\n")
}
