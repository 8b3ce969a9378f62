//! Thrift syntax tree.
//!
//! Produced by [`ThriftParser`](super::ThriftParser) and consumed by the
//! adapter. Only what the adapter needs is kept for definitions other
//! than structs.

use std::fmt;

/// A parsed Thrift document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// `include`, `cpp_include` and `namespace` headers
    pub headers: Vec<Header>,

    /// Top-level definitions in source order
    pub statements: Vec<Statement>,
}

/// Document header.
#[derive(Debug, Clone, PartialEq)]
pub enum Header {
    Include(String),
    CppInclude(String),
    Namespace { scope: String, name: String },
}

/// Top-level definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Struct(StructDefinition),
    Union(StructDefinition),
    Exception(StructDefinition),
    Enum(EnumDefinition),
    Typedef(TypedefDefinition),
    Const(ConstDefinition),
    Service(ServiceDefinition),
}

impl Statement {
    /// Discriminant of this statement.
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Struct(_) => StatementKind::Struct,
            Statement::Union(_) => StatementKind::Union,
            Statement::Exception(_) => StatementKind::Exception,
            Statement::Enum(_) => StatementKind::Enum,
            Statement::Typedef(_) => StatementKind::Typedef,
            Statement::Const(_) => StatementKind::Const,
            Statement::Service(_) => StatementKind::Service,
        }
    }

    /// Declared name of this statement.
    pub fn name(&self) -> &str {
        match self {
            Statement::Struct(s) | Statement::Union(s) | Statement::Exception(s) => &s.name,
            Statement::Enum(e) => &e.name,
            Statement::Typedef(t) => &t.name,
            Statement::Const(c) => &c.name,
            Statement::Service(s) => &s.name,
        }
    }
}

/// Statement discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Struct,
    Union,
    Exception,
    Enum,
    Typedef,
    Const,
    Service,
}

impl StatementKind {
    /// The Thrift keyword introducing this statement.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Struct => "struct",
            StatementKind::Union => "union",
            StatementKind::Exception => "exception",
            StatementKind::Enum => "enum",
            StatementKind::Typedef => "typedef",
            StatementKind::Const => "const",
            StatementKind::Service => "service",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Struct, union or exception body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructDefinition {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
    pub annotations: Vec<Annotation>,
}

/// A field of a struct, or a function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    /// Field id (`1:`), if given
    pub id: Option<i64>,
    pub name: String,
    pub field_type: FieldType,
    pub requiredness: Requiredness,
    pub default_value: Option<ConstNode>,
    /// `None` when the field has no annotation list at all
    pub annotations: Option<Vec<Annotation>>,
}

impl FieldDefinition {
    /// Create a field with default requiredness and nothing else attached.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: None,
            name: name.into(),
            field_type,
            requiredness: Requiredness::Default,
            default_value: None,
            annotations: None,
        }
    }
}

/// Field requiredness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requiredness {
    Required,
    Optional,
    #[default]
    Default,
}

/// `name = "value"` annotation. The value may be omitted in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: String,
    pub value: Option<String>,
}

/// Field type syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Bool,
    Byte,
    I8,
    I16,
    I32,
    I64,
    Double,
    String,
    Binary,
    Void,
    List(Box<FieldType>),
    Set(Box<FieldType>),
    Map(Box<FieldType>, Box<FieldType>),
    /// Reference to a named type (struct, enum, typedef)
    Identifier(String),
}

/// Constant expression syntax. Numeric literals keep their source text.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstNode {
    Bool(bool),
    Int(String),
    Double(String),
    String(String),
    List(Vec<ConstNode>),
    Map(Vec<(ConstNode, ConstNode)>),
    Identifier(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDefinition {
    pub name: String,
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name: String,
    pub value: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedefDefinition {
    pub name: String,
    pub field_type: FieldType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstDefinition {
    pub name: String,
    pub field_type: FieldType,
    pub value: ConstNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDefinition {
    pub name: String,
    pub extends: Option<String>,
    pub functions: Vec<FunctionDefinition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub oneway: bool,
    pub return_type: FieldType,
    pub params: Vec<FieldDefinition>,
    pub throws: Vec<FieldDefinition>,
}
