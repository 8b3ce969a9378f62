//! Property-based tests for thrift-zod-cli.
//!
//! Properties tested:
//! - Config override precedence: set CLI values win, unset ones keep the file value
//! - File discovery completeness: every .thrift file is found, nothing else
//! - Dry run safety: a dry run never touches the filesystem

use proptest::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use thrift_zod_cli::{
    config::{CliArgs, Config, ConfigManager},
    scanner::SourceScanner,
    writer::FileWriter,
};

fn arb_filename() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}"
}

proptest! {
    #[test]
    fn prop_cli_args_take_precedence(
        output in proptest::option::of("[a-z]{1,8}"),
        generate_types in proptest::option::of(any::<bool>()),
        generate_docs in proptest::option::of(any::<bool>()),
        disable_optional in proptest::option::of(any::<bool>()),
        file_types in any::<bool>(),
    ) {
        let mut base = Config::default();
        base.output.generate_types = file_types;

        let args = CliArgs {
            output: output.clone().map(PathBuf::from),
            generate_types,
            generate_docs,
            disable_optional_fields: disable_optional,
            ..Default::default()
        };
        let merged = ConfigManager::merge_cli_args(base.clone(), &args);

        prop_assert_eq!(
            merged.output.dir,
            output.map(PathBuf::from).unwrap_or(base.output.dir)
        );
        prop_assert_eq!(merged.output.generate_types, generate_types.unwrap_or(file_types));
        prop_assert_eq!(
            merged.output.generate_docs,
            generate_docs.unwrap_or(base.output.generate_docs)
        );
        prop_assert_eq!(
            merged.features.disable_optional_fields,
            disable_optional.unwrap_or(false)
        );
        prop_assert_eq!(merged.naming, base.naming);
    }

    #[test]
    fn prop_scanner_finds_exactly_thrift_files(
        thrift in prop::collection::hash_set(arb_filename(), 1..6),
        other in prop::collection::hash_set(arb_filename(), 0..4),
    ) {
        let dir = TempDir::new().unwrap();
        for name in &thrift {
            fs::write(dir.path().join(format!("{}.thrift", name)), "struct A {}").unwrap();
        }
        for name in &other {
            fs::write(dir.path().join(format!("{}.txt", name)), "").unwrap();
        }

        let found: HashSet<String> = SourceScanner::new(dir.path())
            .scan()
            .unwrap()
            .into_iter()
            .map(|f| f.relative_path.to_string_lossy().to_string())
            .collect();
        let expected: HashSet<String> = thrift.iter().map(|n| format!("{}.thrift", n)).collect();

        prop_assert_eq!(found, expected);
    }

    #[test]
    fn prop_dry_run_never_writes(name in arb_filename(), content in ".{0,64}") {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join(format!("{}.ts", name));

        FileWriter::new(true).write(&path, &content).unwrap();

        prop_assert!(!path.exists());
        prop_assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }
}
