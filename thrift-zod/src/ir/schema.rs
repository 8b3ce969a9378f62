//! Field and struct schema definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ir::types::TypeDescriptor;

/// Ordered mapping of field name to field schema.
pub type ObjectShape = IndexMap<String, FieldSchema>;

/// A single named, typed field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Field name as declared in the IDL
    pub name: String,

    /// Field type
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,

    /// Annotation name to value, in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub annotations: IndexMap<String, String>,
}

impl FieldSchema {
    /// Create a field without annotations.
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: IndexMap::new(),
        }
    }

    /// Add an annotation.
    pub fn with_annotation(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(name.into(), value.into());
        self
    }
}

/// A struct converted into a schema: its name and fields in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StructSchema {
    /// Struct name as declared in the IDL
    pub name: String,

    /// Fields keyed by name
    pub fields: ObjectShape,
}

impl StructSchema {
    /// Create an empty struct schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: ObjectShape::new(),
        }
    }

    /// Insert a field.
    ///
    /// Re-inserting a name replaces the earlier field but keeps its position.
    pub fn insert(&mut self, field: FieldSchema) -> Option<FieldSchema> {
        self.fields.insert(field.name.clone(), field)
    }

    /// Builder form of [`StructSchema::insert`].
    pub fn with_field(mut self, field: FieldSchema) -> Self {
        self.insert(field);
        self
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the struct has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// View the struct as an object type.
    pub fn to_object(&self) -> TypeDescriptor {
        TypeDescriptor::Object(self.fields.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_declaration_order() {
        let schema = StructSchema::new("Corgi")
            .with_field(FieldSchema::new("name", TypeDescriptor::String))
            .with_field(FieldSchema::new("age", TypeDescriptor::Number))
            .with_field(FieldSchema::new("color", TypeDescriptor::String));

        let names: Vec<_> = schema.fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["name", "age", "color"]);
    }

    #[test]
    fn test_duplicate_field_last_write_wins_first_position() {
        let mut schema = StructSchema::new("Dup");
        schema.insert(FieldSchema::new("a", TypeDescriptor::String));
        schema.insert(FieldSchema::new("b", TypeDescriptor::String));
        let previous = schema.insert(FieldSchema::new("a", TypeDescriptor::Number));

        assert_eq!(previous.map(|f| f.ty), Some(TypeDescriptor::String));
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.fields.get_index_of("a"), Some(0));
        assert_eq!(schema.get("a").unwrap().ty, TypeDescriptor::Number);
    }

    #[test]
    fn test_annotations() {
        let field = FieldSchema::new("id", TypeDescriptor::Number)
            .with_annotation("go.tag", "json:\"id\"")
            .with_annotation("deprecated", "true");

        assert_eq!(field.annotations.len(), 2);
        assert_eq!(field.annotations["deprecated"], "true");
    }
}
