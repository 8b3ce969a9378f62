//! Thrift document to struct schema adaptation.
//!
//! # Components
//!
//! - [`type_mapper`] - Maps Thrift field types to [`TypeDescriptor`]s
//! - [`const_eval`] - Evaluates constant expressions to [`ConstValue`]s
//! - [`builder`] - Builds field and struct schemas
//!
//! The entry points read a file ([`run`], [`load`]) or take source text
//! ([`adapt_source`]). All of them take the run's [`GeneratorOptions`]
//! explicitly.
//!
//! [`TypeDescriptor`]: crate::ir::TypeDescriptor
//! [`ConstValue`]: crate::ir::ConstValue

pub mod builder;
pub mod const_eval;
pub mod type_mapper;

use std::path::Path;

use tracing::debug;

pub use builder::{build_field, build_struct, SchemaBuilder};
pub use const_eval::evaluate;
pub use type_mapper::map_type;

use crate::error::{Error, Result, Warning};
use crate::ir::value::is_identifier;
use crate::ir::StructSchema;
use crate::options::GeneratorOptions;
use crate::thrift::{Document, IdlParser, Statement, ThriftParser};

/// Structs adapted from one document, plus the warnings raised on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adapted {
    pub structs: Vec<StructSchema>,
    pub warnings: Vec<Warning>,
}

/// Walks top-level statements, keeping structs.
#[derive(Debug)]
pub struct Adapter<'a> {
    builder: SchemaBuilder<'a>,
}

impl<'a> Adapter<'a> {
    /// Create an adapter for one run.
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self {
            builder: SchemaBuilder::new(options),
        }
    }

    /// Adapt one statement. Anything but a struct yields `None`, as does a
    /// struct whose name cannot be used as a TypeScript identifier.
    pub fn adapt_statement(&mut self, statement: &Statement) -> Option<StructSchema> {
        match statement {
            Statement::Struct(definition) if !is_identifier(&definition.name) => {
                self.builder.warn(Warning::InvalidStructName {
                    name: definition.name.clone(),
                });
                None
            }
            Statement::Struct(definition) => {
                let schema = self.builder.build_struct(definition);
                debug!(name = %schema.name, fields = schema.len(), "adapted struct");
                Some(schema)
            }
            other => {
                self.builder.warn(Warning::UnsupportedStatement {
                    kind: other.kind().to_string(),
                    name: other.name().to_string(),
                });
                None
            }
        }
    }

    /// Adapt every statement of a document, in order.
    pub fn adapt_document(mut self, document: &Document) -> Adapted {
        let structs = document
            .statements
            .iter()
            .filter_map(|statement| self.adapt_statement(statement))
            .collect();

        Adapted {
            structs,
            warnings: self.builder.into_warnings(),
        }
    }
}

/// Parse and adapt IDL source text.
pub fn adapt_source(source: &str, options: &GeneratorOptions) -> Result<Adapted> {
    adapt_with(&ThriftParser::new(), source, None, options)
}

/// Read, parse and adapt the IDL file at `path`, keeping warnings.
pub fn load(path: impl AsRef<Path>, options: &GeneratorOptions) -> Result<Adapted> {
    load_with(&ThriftParser::new(), path.as_ref(), options)
}

/// Read, parse and adapt the IDL file at `path`.
///
/// Fails with [`Error::Io`] when the file is missing, unreadable or empty,
/// and with [`Error::Parse`] when the parser reports syntax errors.
pub fn run(path: impl AsRef<Path>, options: &GeneratorOptions) -> Result<Vec<StructSchema>> {
    load(path, options).map(|adapted| adapted.structs)
}

/// [`run`] with a caller-supplied parser.
pub fn run_with(
    parser: &dyn IdlParser,
    path: impl AsRef<Path>,
    options: &GeneratorOptions,
) -> Result<Vec<StructSchema>> {
    load_with(parser, path.as_ref(), options).map(|adapted| adapted.structs)
}

fn load_with(parser: &dyn IdlParser, path: &Path, options: &GeneratorOptions) -> Result<Adapted> {
    let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    if source.trim().is_empty() {
        return Err(Error::empty_source(path));
    }

    debug!(path = %path.display(), bytes = source.len(), "read IDL source");
    adapt_with(parser, &source, Some(path), options)
}

fn adapt_with(
    parser: &dyn IdlParser,
    source: &str,
    path: Option<&Path>,
    options: &GeneratorOptions,
) -> Result<Adapted> {
    let document = parser
        .parse(source)
        .map_err(|diagnostics| Error::parse(path, diagnostics))?;

    Ok(Adapter::new(options).adapt_document(&document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::TypeDescriptor;
    use crate::thrift::ast::{EnumDefinition, FieldDefinition, FieldType, StructDefinition};
    use crate::thrift::Diagnostic;

    #[test]
    fn test_enum_statement_is_skipped_with_warning() {
        let document = Document {
            headers: Vec::new(),
            statements: vec![
                Statement::Enum(EnumDefinition {
                    name: "Color".into(),
                    members: Vec::new(),
                }),
                Statement::Struct(StructDefinition {
                    name: "Corgi".into(),
                    fields: vec![FieldDefinition::new("name", FieldType::String)],
                    annotations: Vec::new(),
                }),
            ],
        };

        let options = GeneratorOptions::default();
        let adapted = Adapter::new(&options).adapt_document(&document);

        assert_eq!(adapted.structs.len(), 1);
        assert_eq!(adapted.structs[0].name, "Corgi");
        assert_eq!(
            adapted.warnings,
            vec![Warning::UnsupportedStatement {
                kind: "enum".into(),
                name: "Color".into()
            }]
        );
    }

    #[test]
    fn test_adapt_source() {
        let adapted = adapt_source(
            "struct A { 1: list<string> names }\nconst i32 X = 1\nstruct B {}",
            &GeneratorOptions::default(),
        )
        .unwrap();

        let names: Vec<_> = adapted.structs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(
            adapted.structs[0].get("names").unwrap().ty,
            TypeDescriptor::array(TypeDescriptor::String)
        );
        assert_eq!(adapted.warnings.len(), 1);
    }

    #[test]
    fn test_dotted_struct_name_is_skipped_with_warning() {
        let adapted = adapt_source(
            "struct a.b { 1: string x }\nstruct Ok {}",
            &GeneratorOptions::default(),
        )
        .unwrap();

        let names: Vec<_> = adapted.structs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ok"]);
        assert_eq!(
            adapted.warnings,
            vec![Warning::InvalidStructName { name: "a.b".into() }]
        );
    }

    #[test]
    fn test_parse_error_carries_diagnostics() {
        let err = adapt_source("struct {", &GeneratorOptions::default()).unwrap_err();
        match err {
            Error::Parse { path, diagnostics } => {
                assert!(path.is_none());
                assert!(!diagnostics.is_empty());
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    struct FailingParser;

    impl IdlParser for FailingParser {
        fn parse(&self, _source: &str) -> std::result::Result<Document, Vec<Diagnostic>> {
            Err(vec![
                Diagnostic::new(1, 1, "first"),
                Diagnostic::new(2, 1, "second"),
            ])
        }
    }

    #[test]
    fn test_run_with_custom_parser_aggregates_diagnostics() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("any.thrift");
        std::fs::write(&path, "struct A {}").unwrap();

        let err = run_with(&FailingParser, &path, &GeneratorOptions::default()).unwrap_err();
        let Error::Parse { diagnostics, .. } = err else {
            panic!("expected parse error");
        };
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_run_missing_file_is_io_error() {
        let err = run("/definitely/not/here.thrift", &GeneratorOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_run_empty_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.thrift");
        std::fs::write(&path, "  \n").unwrap();

        let err = run(&path, &GeneratorOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
