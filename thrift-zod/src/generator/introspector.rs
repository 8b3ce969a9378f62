//! Schema introspection: rendering descriptors back into source text.
//!
//! [`Introspector::render`] walks a [`TypeDescriptor`] by tag and produces
//! the constructor-call form of the schema, e.g. `array(string())`.
//! [`Introspector::root_render`] is the bare form used when a leaf type is
//! embedded as an element, e.g. `string`.
//!
//! Union members are deduplicated by their rendered text, keeping the
//! first occurrence. Two structurally different members that render the
//! same are treated as one.

use tracing::trace;

use crate::ir::value::{is_identifier, quote};
use crate::ir::{ConstValue, ObjectShape, TypeDescriptor};

/// Renders descriptors as schema-construction source text.
#[derive(Debug, Clone, Default)]
pub struct Introspector {
    /// Prepended to every constructor name, e.g. `z.`
    prefix: String,
}

impl Introspector {
    /// Create an introspector that renders bare constructor names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an introspector that qualifies constructors with `namespace`.
    pub fn with_namespace(namespace: &str) -> Self {
        let prefix = if namespace.is_empty() {
            String::new()
        } else {
            format!("{}.", namespace)
        };
        Self { prefix }
    }

    /// Render `ty` in its full constructor form.
    pub fn render(&self, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::String
            | TypeDescriptor::Number
            | TypeDescriptor::Boolean
            | TypeDescriptor::Void
            | TypeDescriptor::Any
            | TypeDescriptor::Unknown => format!("{}()", self.ctor(&self.root_render(ty))),
            TypeDescriptor::Array(inner) => self.render_array(inner),
            TypeDescriptor::Set(inner) => format!("{}({})", self.ctor("set"), self.render(inner)),
            TypeDescriptor::Map { key, value } => format!(
                "{}({}, {})",
                self.ctor("record"),
                self.render(key),
                self.render(value)
            ),
            TypeDescriptor::Object(fields) => self.ctor(&self.render_object(fields)),
            TypeDescriptor::Union(members) => self.render_union(members),
            TypeDescriptor::Default { inner, value } => self.render_default(inner, value),
            TypeDescriptor::Optional(inner) => format!("{}.optional()", self.render(inner)),
        }
    }

    /// Render `ty` in its root form.
    ///
    /// Leaves give their bare type name and an object gives its shape call
    /// without the namespace prefix. Every other kind renders as in
    /// [`Introspector::render`].
    pub fn root_render(&self, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::String => "string".to_string(),
            TypeDescriptor::Number => "number".to_string(),
            TypeDescriptor::Boolean => "boolean".to_string(),
            TypeDescriptor::Void => "void".to_string(),
            TypeDescriptor::Any => "any".to_string(),
            TypeDescriptor::Unknown => "unknown".to_string(),
            TypeDescriptor::Object(fields) => self.render_object(fields),
            other => self.render(other),
        }
    }

    /// Render a field as `name: <schema>`.
    pub fn render_property(&self, name: &str, ty: &TypeDescriptor) -> String {
        format!("{}: {}", property_name(name), self.render(ty))
    }

    fn ctor(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    fn render_array(&self, inner: &TypeDescriptor) -> String {
        let array = self.ctor("array");

        if let TypeDescriptor::Union(members) = inner {
            let unique = self.unique_members(members);
            match unique.as_slice() {
                [] => {}
                [only] => return format!("{}({})", array, only),
                _ => {
                    return format!("{}({}([{}]))", array, self.ctor("union"), unique.join(", "))
                }
            }
        }

        let root = self.root_render(inner);
        if inner.is_leaf() {
            format!("{}({}())", array, self.ctor(&root))
        } else if root.starts_with("object") {
            format!("{}({})", array, self.ctor(&root))
        } else {
            format!("{}({})", array, root)
        }
    }

    fn render_default(&self, inner: &TypeDescriptor, value: &ConstValue) -> String {
        let literal = default_literal(inner, value);
        if inner.is_leaf() {
            format!(
                "{}().default({})",
                self.ctor(&self.root_render(inner)),
                literal
            )
        } else {
            format!("{}.default({})", self.render(inner), literal)
        }
    }

    fn render_object(&self, fields: &ObjectShape) -> String {
        if fields.is_empty() {
            return "object({})".to_string();
        }

        let properties: Vec<String> = fields
            .iter()
            .map(|(name, field)| self.render_property(name, &field.ty))
            .collect();
        format!("object({{ {} }})", properties.join(", "))
    }

    fn render_union(&self, members: &[TypeDescriptor]) -> String {
        format!(
            "{}([{}])",
            self.ctor("union"),
            self.unique_members(members).join(", ")
        )
    }

    fn unique_members(&self, members: &[TypeDescriptor]) -> Vec<String> {
        let mut unique: Vec<String> = Vec::with_capacity(members.len());
        for rendered in members.iter().map(|m| self.render(m)) {
            if !unique.contains(&rendered) {
                unique.push(rendered);
            }
        }
        unique
    }
}

/// Render `ty` with bare constructor names.
pub fn render(ty: &TypeDescriptor) -> String {
    trace!(tag = ty.tag(), "render");
    Introspector::new().render(ty)
}

/// Root form of `ty` with bare constructor names.
pub fn root_render(ty: &TypeDescriptor) -> String {
    trace!(tag = ty.tag(), "root render");
    Introspector::new().root_render(ty)
}

/// Format a default value according to the kind it defaults.
fn default_literal(inner: &TypeDescriptor, value: &ConstValue) -> String {
    match (inner, value) {
        (TypeDescriptor::String, value) => quote(&value.to_text()),
        (
            TypeDescriptor::Number | TypeDescriptor::Boolean,
            ConstValue::Number(_) | ConstValue::Bool(_),
        ) => value.to_text(),
        (_, value) => value.to_literal(),
    }
}

fn property_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        quote(name)
    }
}
