//! Thrift to validation type mappings.
//!
//! # Type Mappings
//!
//! | Thrift Type | Descriptor |
//! |-------------|------------|
//! | `byte`, `i8`, `i16`, `i32`, `i64`, `double` | `Number` |
//! | `string`, `binary` | `String` |
//! | `bool` | `Boolean` |
//! | `void` | `Void` |
//! | `list<T>` | `Array(T)` |
//! | `set<T>` | `Set(T)` |
//! | `map<K, V>` | `Map(K, V)` |
//! | Named types | `Unknown` |
//!
//! Named types are not resolved: a reference to another struct, enum or
//! typedef always maps to `Unknown`.

use crate::ir::TypeDescriptor;
use crate::thrift::ast::FieldType;

/// Map a Thrift field type to its descriptor. Never fails.
pub fn map_type(field_type: &FieldType) -> TypeDescriptor {
    match field_type {
        FieldType::Byte
        | FieldType::I8
        | FieldType::I16
        | FieldType::I32
        | FieldType::I64
        | FieldType::Double => TypeDescriptor::Number,
        FieldType::String | FieldType::Binary => TypeDescriptor::String,
        FieldType::Void => TypeDescriptor::Void,
        FieldType::Bool => TypeDescriptor::Boolean,
        FieldType::List(inner) => TypeDescriptor::array(map_type(inner)),
        FieldType::Set(inner) => TypeDescriptor::set(map_type(inner)),
        FieldType::Map(key, value) => TypeDescriptor::map(map_type(key), map_type(value)),
        FieldType::Identifier(_) => TypeDescriptor::Unknown,
    }
}
