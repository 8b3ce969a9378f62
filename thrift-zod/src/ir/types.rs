//! Validation type descriptors.
//!
//! [`TypeDescriptor`] is the canonical, schema-library-agnostic
//! representation of a field type. Everything downstream of the adapter
//! (rendering, emission) dispatches on its tag and nothing else.

use serde::{Deserialize, Serialize};

use crate::ir::schema::ObjectShape;
use crate::ir::value::ConstValue;

/// Validation type descriptor.
///
/// Leaf kinds carry no data. Compound kinds own their children, so the
/// nesting depth of a descriptor is always finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TypeDescriptor {
    // ==========================================================================
    // Leaves
    // ==========================================================================
    /// String type (Thrift: string, binary)
    String,

    /// Number type (Thrift: byte, i8, i16, i32, i64, double)
    Number,

    /// Boolean type (Thrift: bool)
    Boolean,

    /// Void type
    Void,

    /// Any type - accepts any value
    Any,

    /// Unknown type - unresolved references end up here
    Unknown,

    // ==========================================================================
    // Compound Types
    // ==========================================================================
    /// List type
    Array(Box<TypeDescriptor>),

    /// Set type
    Set(Box<TypeDescriptor>),

    /// Map type with key and value types
    Map {
        key: Box<TypeDescriptor>,
        value: Box<TypeDescriptor>,
    },

    /// Object with named fields in declaration order
    Object(ObjectShape),

    /// Union of member types
    Union(Vec<TypeDescriptor>),

    // ==========================================================================
    // Modifiers
    // ==========================================================================
    /// Inner type with a default value
    Default {
        inner: Box<TypeDescriptor>,
        value: ConstValue,
    },

    /// Inner type that may be absent
    Optional(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Create an array of `inner`.
    pub fn array(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(inner))
    }

    /// Create a set of `inner`.
    pub fn set(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Set(Box::new(inner))
    }

    /// Create a map from `key` to `value`.
    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Create a union, dropping structurally equal duplicates.
    ///
    /// The first occurrence of each member keeps its position.
    pub fn union(members: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        let mut unique: Vec<TypeDescriptor> = Vec::new();
        for member in members {
            if !unique.contains(&member) {
                unique.push(member);
            }
        }
        TypeDescriptor::Union(unique)
    }

    /// Wrap this type with a default value.
    pub fn with_default(self, value: ConstValue) -> Self {
        TypeDescriptor::Default {
            inner: Box::new(self),
            value,
        }
    }

    /// Mark this type as optional.
    #[allow(clippy::wrong_self_convention)]
    pub fn into_optional(self) -> Self {
        TypeDescriptor::Optional(Box::new(self))
    }

    /// Parse a descriptor produced elsewhere (e.g. serialized by another
    /// schema tool) from its adjacently tagged JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check if this is a leaf type.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::String
                | TypeDescriptor::Number
                | TypeDescriptor::Boolean
                | TypeDescriptor::Void
                | TypeDescriptor::Any
                | TypeDescriptor::Unknown
        )
    }

    /// Short tag name, used in diagnostics.
    pub fn tag(&self) -> &'static str {
        match self {
            TypeDescriptor::String => "String",
            TypeDescriptor::Number => "Number",
            TypeDescriptor::Boolean => "Boolean",
            TypeDescriptor::Void => "Void",
            TypeDescriptor::Any => "Any",
            TypeDescriptor::Unknown => "Unknown",
            TypeDescriptor::Array(_) => "Array",
            TypeDescriptor::Set(_) => "Set",
            TypeDescriptor::Map { .. } => "Map",
            TypeDescriptor::Object(_) => "Object",
            TypeDescriptor::Union(_) => "Union",
            TypeDescriptor::Default { .. } => "Default",
            TypeDescriptor::Optional(_) => "Optional",
        }
    }
}
