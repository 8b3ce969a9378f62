//! # thrift-zod
//!
//! Converts the struct definitions of a Thrift IDL file into TypeScript
//! [Zod](https://zod.dev) schema declarations.
//!
//! ## Pipeline
//!
//! 1. [`thrift`] parses IDL text into a [`Document`](thrift::Document)
//! 2. [`adapter`] turns struct statements into [`StructSchema`]s
//! 3. [`generator`] renders each field and emits one TypeScript module
//!
//! ## Usage
//!
//! ```rust,no_run
//! use thrift_zod::{generate, EmitterConfig, GeneratorOptions};
//!
//! let code = generate(
//!     "service.thrift",
//!     &GeneratorOptions::default(),
//!     &EmitterConfig::default(),
//! )?;
//! println!("{}", code);
//! # Ok::<(), thrift_zod::Error>(())
//! ```
//!
//! Given
//!
//! ```thrift
//! struct Corgi {
//!   1: string name
//!   2: bool is_cute = true
//! }
//! ```
//!
//! the emitted module contains
//!
//! ```typescript
//! export const CorgiSchema = z.object({
//!   name: z.string(),
//!   is_cute: z.boolean().default(true)
//! });
//! ```
//!
//! Only structs are converted. Enums, typedefs, services and the like are
//! parsed, reported as warnings and skipped. References to other named
//! types are not resolved and render as `z.unknown()`.

pub mod adapter;
pub mod error;
pub mod generator;
pub mod ir;
pub mod options;
pub mod thrift;

use std::path::Path;

pub use adapter::{adapt_source, load, run, run_with, Adapted, Adapter};
pub use error::{Error, Result, Warning};
pub use generator::{emit, render, root_render, schema_name, CodeEmitter, EmitterConfig};
pub use ir::{ConstValue, FieldSchema, ObjectShape, StructSchema, TypeDescriptor};
pub use options::GeneratorOptions;
pub use thrift::{Diagnostic, IdlParser, ThriftParser};

/// Read the IDL file at `path` and emit its Zod module.
pub fn generate(
    path: impl AsRef<Path>,
    options: &GeneratorOptions,
    config: &EmitterConfig,
) -> Result<String> {
    let structs = run(path, options)?;
    CodeEmitter::with_config(config.clone()).emit(&structs)
}
