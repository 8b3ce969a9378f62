//! Intermediate Representation (IR) module.
//!
//! Schema-library-agnostic structures produced by the adapter and consumed
//! by the generator: type descriptors, evaluated constants, and field and
//! struct schemas.

pub mod schema;
pub mod types;
pub mod value;

pub use schema::{FieldSchema, ObjectShape, StructSchema};
pub use types::TypeDescriptor;
pub use value::ConstValue;
