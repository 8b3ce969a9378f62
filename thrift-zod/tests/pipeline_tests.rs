//! End-to-end tests: IDL file in, TypeScript module out.

use std::path::PathBuf;

use thrift_zod::{
    adapt_source, generate, load, run, ConstValue, EmitterConfig, Error, GeneratorOptions,
    TypeDescriptor, Warning,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn optional_fields_disabled() -> GeneratorOptions {
    GeneratorOptions::new().with_disable_optional_fields(true)
}

// =============================================================================
// Adaptation
// =============================================================================

#[test]
fn test_corgi_fields() {
    let structs = run(fixture("service.thrift"), &optional_fields_disabled()).unwrap();
    let corgi = &structs[0];

    assert_eq!(corgi.name, "CorgiStruct");
    assert_eq!(corgi.get("name").unwrap().ty, TypeDescriptor::String);
    assert_eq!(corgi.get("age").unwrap().ty, TypeDescriptor::Number);
    assert_eq!(corgi.get("weight").unwrap().ty, TypeDescriptor::Number);
    assert_eq!(corgi.get("color").unwrap().ty, TypeDescriptor::String);
    assert_eq!(
        corgi.get("is_cute").unwrap().ty,
        TypeDescriptor::Boolean.with_default(ConstValue::Bool(true))
    );
}

#[test]
fn test_only_structs_are_kept() {
    let structs = run(fixture("service.thrift"), &GeneratorOptions::default()).unwrap();
    let names: Vec<_> = structs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["CorgiStruct", "MyStruct", "Kennel"]);
}

#[test]
fn test_skipped_statements_are_reported() {
    let adapted = load(fixture("service.thrift"), &GeneratorOptions::default()).unwrap();

    assert!(adapted.warnings.contains(&Warning::UnsupportedStatement {
        kind: "enum".into(),
        name: "Color".into(),
    }));
    assert!(adapted.warnings.contains(&Warning::UnsupportedStatement {
        kind: "const".into(),
        name: "MAX_CORGIS".into(),
    }));
    assert!(adapted.warnings.contains(&Warning::UnsupportedStatement {
        kind: "service".into(),
        name: "CorgiService".into(),
    }));
}

#[test]
fn test_optional_fields_follow_options() {
    let source = "struct S { 1: optional string nickname }";

    let marked = adapt_source(source, &GeneratorOptions::default()).unwrap();
    assert_eq!(
        marked.structs[0].get("nickname").unwrap().ty,
        TypeDescriptor::String.into_optional()
    );

    let plain = adapt_source(source, &optional_fields_disabled()).unwrap();
    assert_eq!(
        plain.structs[0].get("nickname").unwrap().ty,
        TypeDescriptor::String
    );
}

#[test]
fn test_parse_error_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.thrift");
    std::fs::write(&path, "struct Broken {\n  1: string\n").unwrap();

    let err = run(&path, &GeneratorOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().contains("broken.thrift"));
}

// =============================================================================
// Emission
// =============================================================================

#[test]
fn test_generate_service_module() {
    let code = generate(
        fixture("service.thrift"),
        &optional_fields_disabled(),
        &EmitterConfig::default(),
    )
    .unwrap();

    insta::assert_snapshot!(code, @r###"
// GENERATED CODE - DO NOT MANUALLY MODIFY
import { z } from 'zod';

export const CorgiStructSchema = z.object({
  name: z.string(),
  age: z.number(),
  weight: z.number(),
  color: z.string(),
  is_cute: z.boolean().default(true)
});

export const MyStructSchema = z.object({
  test: z.string(),
  test2: z.number(),
  corgis: z.array(z.unknown())
});

export const KennelSchema = z.object({
  address: z.string(),
  nickname: z.string(),
  visits: z.record(z.string(), z.set(z.number())),
  tags: z.array(z.string()).default([NaN, NaN])
});
"###);
}

#[test]
fn test_generate_with_types_and_docs() {
    let config = EmitterConfig::default().with_types(true).with_docs(true);
    let code = generate(fixture("service.thrift"), &GeneratorOptions::default(), &config).unwrap();

    assert!(code.contains("export type CorgiStruct = z.infer<typeof CorgiStructSchema>;"));
    assert!(code.contains("  nickname: z.string().optional(),"));
    assert!(code.contains("   * @go.tag json:\"address\"\n"));
}

#[test]
fn test_generate_collapses_duplicate_map_default_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("defaults.thrift");
    std::fs::write(
        &path,
        "struct Defaults {\n  1: map<string, list<i32>> m = {\"a\": [1, 2], \"a\": [3]}\n}\n",
    )
    .unwrap();

    let code = generate(&path, &GeneratorOptions::default(), &EmitterConfig::default()).unwrap();
    assert!(code.contains("  m: z.record(z.string(), z.array(z.number())).default({ [NaN]: [3] })\n"));
}

#[test]
fn test_generate_skips_dotted_struct_names() {
    let adapted = adapt_source(
        "struct a.b { 1: string x }\nstruct Plain { 1: string (python.immutable = \"\") y }",
        &GeneratorOptions::default(),
    )
    .unwrap();

    let code = thrift_zod::emit(&adapted.structs).unwrap();
    assert!(!code.contains("a.b"));
    assert!(code.contains("export const PlainSchema = z.object({\n  y: z.string()\n});"));
    assert_eq!(
        adapted.warnings,
        vec![Warning::InvalidStructName { name: "a.b".into() }]
    );
}

#[test]
fn test_generate_from_struct_free_file_is_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("enums.thrift");
    std::fs::write(&path, "enum Color { RED, GREEN }").unwrap();

    let err = generate(&path, &GeneratorOptions::default(), &EmitterConfig::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyInput));
}
