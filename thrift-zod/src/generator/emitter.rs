//! Zod module emitter.
//!
//! Turns a list of [`StructSchema`]s into one TypeScript module:
//!
//! ```text
//! // GENERATED CODE - DO NOT MANUALLY MODIFY
//! import { z } from 'zod';
//!
//! export const CorgiSchema = z.object({
//!   name: z.string(),
//!   is_cute: z.boolean().default(true)
//! });
//! ```
//!
//! Declarations follow input order and are separated by a blank line.
//! Optionally each schema is followed by a `z.infer` type alias, and field
//! annotations are rendered as JSDoc tags.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::generator::introspector::Introspector;
use crate::ir::value::{is_identifier, quote};
use crate::ir::{FieldSchema, StructSchema};

/// First line of every emitted module.
pub const GENERATED_MARKER: &str = "// GENERATED CODE - DO NOT MANUALLY MODIFY";

/// Output settings for the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Identifier the schema library is imported as
    pub namespace: String,
    /// Module the schema library is imported from
    pub import_from: String,
    /// Indentation of object properties
    pub indent: String,
    /// Appended to struct names unless already present
    pub schema_suffix: String,
    /// Emit `export type X = z.infer<typeof XSchema>;` after each schema
    pub generate_types: bool,
    /// Emit field annotations as JSDoc comments
    pub generate_docs: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            namespace: "z".to_string(),
            import_from: "zod".to_string(),
            indent: "  ".to_string(),
            schema_suffix: "Schema".to_string(),
            generate_types: false,
            generate_docs: false,
        }
    }
}

impl EmitterConfig {
    /// Set the schema name suffix.
    pub fn with_schema_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.schema_suffix = suffix.into();
        self
    }

    /// Enable or disable type alias generation.
    pub fn with_types(mut self, enabled: bool) -> Self {
        self.generate_types = enabled;
        self
    }

    /// Enable or disable JSDoc generation.
    pub fn with_docs(mut self, enabled: bool) -> Self {
        self.generate_docs = enabled;
        self
    }
}

/// Emits TypeScript modules of Zod schema declarations.
#[derive(Debug, Clone)]
pub struct CodeEmitter {
    config: EmitterConfig,
    introspector: Introspector,
}

impl Default for CodeEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeEmitter {
    /// Create an emitter with default settings.
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Create an emitter with `config`.
    pub fn with_config(config: EmitterConfig) -> Self {
        let introspector = Introspector::with_namespace(&config.namespace);
        Self {
            config,
            introspector,
        }
    }

    /// Settings in use.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Emit a complete module for `structs`, in order.
    ///
    /// Fails with [`Error::EmptyInput`] when there is nothing to declare.
    pub fn emit(&self, structs: &[StructSchema]) -> Result<String> {
        if structs.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut sections = vec![self.preamble()];
        sections.extend(structs.iter().map(|s| self.emit_struct(s)));

        debug!(schemas = structs.len(), "emitted module");
        Ok(format!("{}\n", sections.join("\n\n")))
    }

    /// The marker and import lines.
    pub fn preamble(&self) -> String {
        format!(
            "{}\nimport {{ {} }} from '{}';",
            GENERATED_MARKER, self.config.namespace, self.config.import_from
        )
    }

    /// Emit the declaration of a single struct, without trailing newline.
    pub fn emit_struct(&self, schema: &StructSchema) -> String {
        let name = self.schema_name(&schema.name);
        trace!(structure = %schema.name, schema = %name, "emitting declaration");

        let object = format!("{}.object", self.config.namespace);
        let mut declaration = if schema.is_empty() {
            format!("export const {} = {}({{}});", name, object)
        } else {
            let properties: Vec<String> = schema
                .fields
                .values()
                .map(|field| self.emit_property(field))
                .collect();
            format!(
                "export const {} = {}({{\n{}\n}});",
                name,
                object,
                properties.join(",\n")
            )
        };

        if self.config.generate_types {
            declaration.push_str(&format!(
                "\nexport type {} = {}.infer<typeof {}>;",
                type_name(&schema.name, &name),
                self.config.namespace,
                name
            ));
        }

        declaration
    }

    /// Exported constant name for a struct.
    pub fn schema_name(&self, struct_name: &str) -> String {
        with_suffix(struct_name, &self.config.schema_suffix)
    }

    fn emit_property(&self, field: &FieldSchema) -> String {
        let indent = &self.config.indent;
        let key = if is_identifier(&field.name) {
            field.name.clone()
        } else {
            quote(&field.name)
        };
        let property = format!("{}{}: {}", indent, key, self.introspector.render(&field.ty));

        if !self.config.generate_docs || field.annotations.is_empty() {
            return property;
        }

        let mut lines = vec![format!("{}/**", indent)];
        for (name, value) in &field.annotations {
            lines.push(format!("{} * @{} {}", indent, name, escape_comment(value)));
        }
        lines.push(format!("{} */", indent));
        lines.push(property);
        lines.join("\n")
    }
}

/// Emit `structs` with default settings.
pub fn emit(structs: &[StructSchema]) -> Result<String> {
    CodeEmitter::new().emit(structs)
}

/// Exported constant name for a struct with the default suffix.
pub fn schema_name(struct_name: &str) -> String {
    with_suffix(struct_name, "Schema")
}

fn with_suffix(name: &str, suffix: &str) -> String {
    if name.to_lowercase().ends_with(&suffix.to_lowercase()) {
        name.to_string()
    } else {
        format!("{}{}", name, suffix)
    }
}

/// Type alias name. Falls back to `<name>Type` when the struct name would
/// collide with its schema constant.
fn type_name(struct_name: &str, schema_name: &str) -> String {
    if struct_name == schema_name {
        format!("{}Type", struct_name)
    } else {
        struct_name.to_string()
    }
}

fn escape_comment(text: &str) -> String {
    text.replace("*/", "*\\/").replace('\n', " ")
}
