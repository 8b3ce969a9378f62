//! Schema rendering and module emission.
//!
//! - [`introspector`] renders a single descriptor back to schema text
//! - [`emitter`] assembles struct declarations into a TypeScript module

pub mod emitter;
pub mod introspector;

pub use emitter::{emit, schema_name, CodeEmitter, EmitterConfig, GENERATED_MARKER};
pub use introspector::{render, root_render, Introspector};
