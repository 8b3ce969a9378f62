//! Field and struct schema construction.
//!
//! Combines [`map_type`] and [`evaluate`] per field and applies the
//! default, optional and annotation rules.

use tracing::{trace, warn};

use crate::adapter::const_eval::evaluate;
use crate::adapter::type_mapper::map_type;
use crate::error::Warning;
use crate::ir::{FieldSchema, StructSchema};
use crate::options::GeneratorOptions;
use crate::thrift::ast::{FieldDefinition, Requiredness, StructDefinition};

/// Builds schemas for one run, collecting warnings along the way.
#[derive(Debug)]
pub struct SchemaBuilder<'a> {
    options: &'a GeneratorOptions,
    warnings: Vec<Warning>,
}

impl<'a> SchemaBuilder<'a> {
    /// Create a builder bound to the run's options.
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self {
            options,
            warnings: Vec::new(),
        }
    }

    /// Build the schema of a struct, fields in declaration order.
    pub fn build_struct(&mut self, definition: &StructDefinition) -> StructSchema {
        let mut schema = StructSchema::new(&definition.name);
        for field in &definition.fields {
            let built = self.build_field_in(&definition.name, field);
            if schema.insert(built).is_some() {
                trace!(
                    structure = %definition.name,
                    field = %field.name,
                    "duplicate field replaced"
                );
            }
        }
        schema
    }

    /// Build the schema of a single field.
    pub fn build_field(&mut self, field: &FieldDefinition) -> FieldSchema {
        self.build_field_in("", field)
    }

    fn build_field_in(&mut self, structure: &str, field: &FieldDefinition) -> FieldSchema {
        let mut ty = map_type(&field.field_type);

        if let Some(default) = &field.default_value {
            ty = ty.with_default(evaluate(default));
        } else if !self.options.disable_optional_fields
            && field.requiredness == Requiredness::Optional
        {
            ty = ty.into_optional();
        }

        let mut schema = FieldSchema::new(&field.name, ty);
        for annotation in field.annotations.iter().flatten() {
            match &annotation.value {
                Some(value) => {
                    schema
                        .annotations
                        .insert(annotation.name.clone(), value.clone());
                }
                None => self.warn(Warning::UnsupportedAnnotation {
                    structure: structure.to_string(),
                    field: field.name.clone(),
                    annotation: annotation.name.clone(),
                }),
            }
        }

        schema
    }

    /// Warnings collected so far.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Consume the builder, returning its warnings.
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }

    pub(crate) fn warn(&mut self, warning: Warning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }
}

/// Build a field schema with `options`.
pub fn build_field(field: &FieldDefinition, options: &GeneratorOptions) -> FieldSchema {
    SchemaBuilder::new(options).build_field(field)
}

/// Build a struct schema with `options`.
pub fn build_struct(definition: &StructDefinition, options: &GeneratorOptions) -> StructSchema {
    SchemaBuilder::new(options).build_struct(definition)
}
