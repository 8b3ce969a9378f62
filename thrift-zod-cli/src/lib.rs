//! # thrift-zod-cli
//!
//! Library behind the `thrift-zod` binary.
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`scanner`] - `.thrift` file discovery and filtering
//! - [`generator`] - Per-file conversion through the `thrift-zod` library
//! - [`writer`] - File output and dry-run support
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod generator;
pub mod scanner;
pub mod writer;

pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use generator::{GeneratedFile, GenerationReport, SchemaGenerator};
pub use scanner::{SourceFile, SourceScanner};
pub use writer::{FileWriter, WriteResult};
