//! `pest` based Thrift parser.
//!
//! The grammar lives in `thrift.pest`; this module walks the resulting
//! pairs into the [`ast`](super::ast) types.

use pest::iterators::{Pair, Pairs};
use pest::Parser as _;
use pest_derive::Parser;

use super::ast::{
    Annotation, ConstDefinition, ConstNode, Document, EnumDefinition, EnumMember, FieldDefinition,
    FieldType, FunctionDefinition, Header, Requiredness, ServiceDefinition, Statement,
    StructDefinition, TypedefDefinition,
};
use super::{Diagnostic, IdlParser};

#[derive(Parser)]
#[grammar = "thrift/thrift.pest"]
struct ThriftGrammar;

type ParseResult<T> = Result<T, Diagnostic>;

/// Parser for Thrift IDL source text.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThriftParser;

impl ThriftParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a whole document.
    pub fn parse_document(&self, source: &str) -> ParseResult<Document> {
        let mut pairs = ThriftGrammar::parse(Rule::document, source)?;
        let Some(root) = pairs.next() else {
            return Err(Diagnostic::new(1, 1, "expected document"));
        };

        let mut document = Document::default();
        for pair in root.into_inner() {
            match pair.as_rule() {
                Rule::include => document.headers.push(Header::Include(first_literal(pair)?)),
                Rule::cpp_include => {
                    document.headers.push(Header::CppInclude(first_literal(pair)?))
                }
                Rule::namespace => document.headers.push(namespace(pair)?),
                Rule::const_def => document.statements.push(Statement::Const(const_def(pair)?)),
                Rule::typedef_def => {
                    document.statements.push(Statement::Typedef(typedef_def(pair)?))
                }
                Rule::enum_def => document.statements.push(Statement::Enum(enum_def(pair)?)),
                Rule::struct_def => {
                    document.statements.push(Statement::Struct(struct_body(pair)?))
                }
                Rule::union_def => document.statements.push(Statement::Union(struct_body(pair)?)),
                Rule::exception_def => {
                    document.statements.push(Statement::Exception(struct_body(pair)?))
                }
                Rule::service_def => {
                    document.statements.push(Statement::Service(service_def(pair)?))
                }
                _ => {}
            }
        }

        Ok(document)
    }
}

impl IdlParser for ThriftParser {
    fn parse(&self, source: &str) -> Result<Document, Vec<Diagnostic>> {
        self.parse_document(source).map_err(|d| vec![d])
    }
}

/// Children of a pair, remembering where the parent started.
struct Inner<'i> {
    pairs: Pairs<'i, Rule>,
    line: usize,
    column: usize,
}

impl<'i> Inner<'i> {
    fn of(pair: Pair<'i, Rule>) -> Self {
        let (line, column) = pair.line_col();
        Self {
            pairs: pair.into_inner(),
            line,
            column,
        }
    }

    fn missing(&self, what: &str) -> Diagnostic {
        Diagnostic::new(self.line, self.column, format!("expected {}", what))
    }

    fn expect(&mut self, what: &str) -> ParseResult<Pair<'i, Rule>> {
        self.pairs.next().ok_or_else(|| self.missing(what))
    }
}

fn first_literal(pair: Pair<'_, Rule>) -> ParseResult<String> {
    let mut inner = Inner::of(pair);
    literal(inner.expect("string literal")?)
}

fn namespace(pair: Pair<'_, Rule>) -> ParseResult<Header> {
    let mut inner = Inner::of(pair);
    let scope = inner.expect("namespace scope")?.as_str().to_string();
    let name = inner.expect("namespace name")?.as_str().to_string();
    Ok(Header::Namespace { scope, name })
}

fn const_def(pair: Pair<'_, Rule>) -> ParseResult<ConstDefinition> {
    let mut inner = Inner::of(pair);
    let field_type = field_type(inner.expect("constant type")?)?;
    let name = inner.expect("constant name")?.as_str().to_string();
    let value = const_value(inner.expect("constant value")?)?;
    Ok(ConstDefinition {
        name,
        field_type,
        value,
    })
}

fn typedef_def(pair: Pair<'_, Rule>) -> ParseResult<TypedefDefinition> {
    let mut inner = Inner::of(pair);
    let field_type = field_type(inner.expect("typedef type")?)?;
    let name = inner.expect("typedef name")?.as_str().to_string();
    Ok(TypedefDefinition { name, field_type })
}

fn enum_def(pair: Pair<'_, Rule>) -> ParseResult<EnumDefinition> {
    let mut inner = Inner::of(pair);
    let name = inner.expect("enum name")?.as_str().to_string();

    let mut members = Vec::new();
    for member in inner.pairs.filter(|p| p.as_rule() == Rule::enum_member) {
        let mut parts = Inner::of(member);
        let name = parts.expect("enum member name")?.as_str().to_string();
        let value = parts
            .pairs
            .find(|p| p.as_rule() == Rule::int_constant)
            .and_then(|p| parse_int(p.as_str()));
        members.push(EnumMember { name, value });
    }

    Ok(EnumDefinition { name, members })
}

fn struct_body(pair: Pair<'_, Rule>) -> ParseResult<StructDefinition> {
    let mut inner = Inner::of(pair);
    let name = inner.expect("struct name")?.as_str().to_string();

    let mut definition = StructDefinition {
        name,
        ..Default::default()
    };
    for part in inner.pairs {
        match part.as_rule() {
            Rule::field => definition.fields.push(field(part)?),
            Rule::annotations => definition.annotations = annotations(part)?,
            _ => {}
        }
    }

    Ok(definition)
}

fn service_def(pair: Pair<'_, Rule>) -> ParseResult<ServiceDefinition> {
    let mut inner = Inner::of(pair);
    let name = inner.expect("service name")?.as_str().to_string();

    let mut service = ServiceDefinition {
        name,
        extends: None,
        functions: Vec::new(),
    };
    for part in inner.pairs {
        match part.as_rule() {
            Rule::extends => service.extends = Some(first_identifier(part)?),
            Rule::function => service.functions.push(function(part)?),
            _ => {}
        }
    }

    Ok(service)
}

fn function(pair: Pair<'_, Rule>) -> ParseResult<FunctionDefinition> {
    let inner = Inner::of(pair);
    let missing_type = inner.missing("return type");
    let missing_name = inner.missing("function name");

    let mut oneway = false;
    let mut return_type = None;
    let mut name = None;
    let mut params = Vec::new();
    let mut throws = Vec::new();

    for part in inner.pairs {
        match part.as_rule() {
            Rule::oneway => oneway = true,
            Rule::field_type => return_type = Some(field_type(part)?),
            Rule::identifier => name = Some(part.as_str().to_string()),
            Rule::field => params.push(field(part)?),
            Rule::throws => {
                for exception in part.into_inner() {
                    throws.push(field(exception)?);
                }
            }
            _ => {}
        }
    }

    Ok(FunctionDefinition {
        name: name.ok_or(missing_name)?,
        oneway,
        return_type: return_type.ok_or(missing_type)?,
        params,
        throws,
    })
}

fn field(pair: Pair<'_, Rule>) -> ParseResult<FieldDefinition> {
    let inner = Inner::of(pair);
    let missing_type = inner.missing("field type");
    let missing_name = inner.missing("field name");

    let mut id = None;
    let mut requiredness = Requiredness::Default;
    let mut ty = None;
    let mut name = None;
    let mut default_value = None;
    let mut field_annotations = None;

    for part in inner.pairs {
        match part.as_rule() {
            Rule::field_id => {
                id = part
                    .into_inner()
                    .next()
                    .and_then(|p| parse_int(p.as_str()));
            }
            Rule::requiredness => {
                requiredness = match part.as_str() {
                    "required" => Requiredness::Required,
                    "optional" => Requiredness::Optional,
                    _ => Requiredness::Default,
                };
            }
            Rule::field_type => ty = Some(field_type(part)?),
            Rule::identifier => name = Some(part.as_str().to_string()),
            Rule::const_value => default_value = Some(const_value(part)?),
            Rule::annotations => field_annotations = Some(annotations(part)?),
            _ => {}
        }
    }

    Ok(FieldDefinition {
        id,
        name: name.ok_or(missing_name)?,
        field_type: ty.ok_or(missing_type)?,
        requiredness,
        default_value,
        annotations: field_annotations,
    })
}

fn field_type(pair: Pair<'_, Rule>) -> ParseResult<FieldType> {
    let mut inner = Inner::of(pair);
    let ty = inner.expect("type")?;

    match ty.as_rule() {
        Rule::base_type => Ok(match ty.as_str() {
            "bool" => FieldType::Bool,
            "byte" => FieldType::Byte,
            "i8" => FieldType::I8,
            "i16" => FieldType::I16,
            "i32" => FieldType::I32,
            "i64" => FieldType::I64,
            "double" => FieldType::Double,
            "string" => FieldType::String,
            "binary" => FieldType::Binary,
            "void" => FieldType::Void,
            other => FieldType::Identifier(other.to_string()),
        }),
        Rule::map_type => {
            let (line, column) = ty.line_col();
            let mut params = type_params(ty)?.into_iter();
            match (params.next(), params.next()) {
                (Some(key), Some(value)) => Ok(FieldType::Map(Box::new(key), Box::new(value))),
                _ => Err(Diagnostic::new(line, column, "expected map key and value types")),
            }
        }
        Rule::set_type => Ok(FieldType::Set(Box::new(single_type_param(ty)?))),
        Rule::list_type => Ok(FieldType::List(Box::new(single_type_param(ty)?))),
        Rule::type_ref => Ok(FieldType::Identifier(ty.as_str().to_string())),
        _ => Err(inner.missing("type")),
    }
}

fn type_params(pair: Pair<'_, Rule>) -> ParseResult<Vec<FieldType>> {
    pair.into_inner()
        .filter(|p| p.as_rule() == Rule::field_type)
        .map(field_type)
        .collect()
}

fn single_type_param(pair: Pair<'_, Rule>) -> ParseResult<FieldType> {
    let (line, column) = pair.line_col();
    type_params(pair)?
        .into_iter()
        .next()
        .ok_or_else(|| Diagnostic::new(line, column, "expected element type"))
}

fn const_value(pair: Pair<'_, Rule>) -> ParseResult<ConstNode> {
    let mut inner = Inner::of(pair);
    let value = inner.expect("constant value")?;

    match value.as_rule() {
        Rule::double_constant => Ok(ConstNode::Double(value.as_str().to_string())),
        Rule::int_constant => Ok(ConstNode::Int(value.as_str().to_string())),
        Rule::bool_literal => Ok(ConstNode::Bool(value.as_str() == "true")),
        Rule::literal => Ok(ConstNode::String(literal(value)?)),
        Rule::identifier => Ok(ConstNode::Identifier(value.as_str().to_string())),
        Rule::const_list => value
            .into_inner()
            .map(const_value)
            .collect::<ParseResult<Vec<_>>>()
            .map(ConstNode::List),
        Rule::const_map => {
            let mut entries = Vec::new();
            for entry in value.into_inner() {
                let mut parts = Inner::of(entry);
                let key = const_value(parts.expect("map key")?)?;
                let val = const_value(parts.expect("map value")?)?;
                entries.push((key, val));
            }
            Ok(ConstNode::Map(entries))
        }
        _ => Err(inner.missing("constant value")),
    }
}

fn annotations(pair: Pair<'_, Rule>) -> ParseResult<Vec<Annotation>> {
    let mut result = Vec::new();
    for annotation in pair.into_inner() {
        let mut parts = Inner::of(annotation);
        let name = parts.expect("annotation name")?.as_str().to_string();
        let value = match parts.pairs.next() {
            Some(literal_pair) => Some(literal(literal_pair)?),
            None => None,
        };
        result.push(Annotation { name, value });
    }
    Ok(result)
}

fn first_identifier(pair: Pair<'_, Rule>) -> ParseResult<String> {
    let mut inner = Inner::of(pair);
    Ok(inner.expect("identifier")?.as_str().to_string())
}

fn literal(pair: Pair<'_, Rule>) -> ParseResult<String> {
    let mut inner = Inner::of(pair);
    let content = inner.expect("string contents")?;
    Ok(unescape(content.as_str()))
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn parse_int(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let value = match digits.strip_prefix("0x") {
        Some(hex) => i64::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    Some(if negative { -value } else { value })
}
