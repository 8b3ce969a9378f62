//! Per-file schema generation.
//!
//! Every discovered `.thrift` file becomes one TypeScript module. Nothing
//! is written here: the caller gets the full set of outputs and writes
//! them only once every file converted.

use std::path::{Path, PathBuf};

use thrift_zod::{CodeEmitter, Error, Warning};

use crate::config::Config;
use crate::error::CliResult;
use crate::scanner::SourceFile;

/// A module generated from one IDL file.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// IDL file the module came from.
    pub source: PathBuf,

    /// Where the module should be written.
    pub output: PathBuf,

    /// Complete TypeScript content.
    pub content: String,

    /// Exported schema constant names, in emission order.
    pub schemas: Vec<String>,

    /// Non-fatal conditions met while adapting the file.
    pub warnings: Vec<Warning>,
}

/// Outcome of a generation run over several files.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Files that produced a module.
    pub files: Vec<GeneratedFile>,

    /// Files that declare no structs.
    pub skipped: Vec<PathBuf>,
}

impl GenerationReport {
    /// Total number of schemas across all files.
    pub fn schema_count(&self) -> usize {
        self.files.iter().map(|f| f.schemas.len()).sum()
    }

    /// All warnings, paired with their source file.
    pub fn warnings(&self) -> impl Iterator<Item = (&Path, &Warning)> {
        self.files
            .iter()
            .flat_map(|f| f.warnings.iter().map(move |w| (f.source.as_path(), w)))
    }
}

/// Converts IDL files with one configuration.
pub struct SchemaGenerator {
    config: Config,
    emitter: CodeEmitter,
}

impl SchemaGenerator {
    /// Create a new schema generator with the given configuration.
    pub fn new(config: Config) -> Self {
        let emitter = CodeEmitter::with_config(config.emitter_config());
        Self { config, emitter }
    }

    /// Convert every file. The first fatal error aborts the run; files
    /// without structs are skipped.
    pub fn generate(&self, files: &[SourceFile], single_file: bool) -> CliResult<GenerationReport> {
        let mut report = GenerationReport::default();

        for file in files {
            let output = self.output_path(file, single_file);
            match self.generate_file(file, output) {
                Ok(generated) => report.files.push(generated),
                Err(crate::error::CliError::Generate(Error::EmptyInput)) => {
                    tracing::info!(path = %file.path.display(), "no structs, skipping");
                    report.skipped.push(file.path.clone());
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    /// Convert one file into a module destined for `output`.
    pub fn generate_file(&self, file: &SourceFile, output: PathBuf) -> CliResult<GeneratedFile> {
        let adapted = thrift_zod::load(&file.path, &self.config.generator_options())?;
        let content = self.emitter.emit(&adapted.structs)?;
        let schemas = adapted
            .structs
            .iter()
            .map(|s| self.emitter.schema_name(&s.name))
            .collect();

        tracing::debug!(
            source = %file.path.display(),
            output = %output.display(),
            "generated module"
        );

        Ok(GeneratedFile {
            source: file.path.clone(),
            output,
            content,
            schemas,
            warnings: adapted.warnings,
        })
    }

    /// Module text for the IDL file at `path`.
    pub fn generate_content(&self, path: &Path) -> CliResult<String> {
        let structs = thrift_zod::run(path, &self.config.generator_options())?;
        Ok(self.emitter.emit(&structs)?)
    }

    /// Output location of a file's module.
    ///
    /// A single input goes to `output.dir/output.file`. Inputs found by a
    /// directory walk keep their relative layout with a `.ts` extension.
    pub fn output_path(&self, file: &SourceFile, single_file: bool) -> PathBuf {
        if single_file {
            self.config.output.dir.join(&self.config.output.file)
        } else {
            self.config
                .output
                .dir
                .join(file.relative_path.with_extension("ts"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn source(dir: &TempDir, relative: &str, content: &str) -> SourceFile {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        SourceFile {
            path,
            relative_path: PathBuf::from(relative),
        }
    }

    fn config_in(dir: &Path) -> Config {
        let mut config = Config::default();
        config.output.dir = dir.to_path_buf();
        config
    }

    #[test]
    fn test_output_paths() {
        let generator = SchemaGenerator::new(config_in(Path::new("out")));
        let file = SourceFile {
            path: PathBuf::from("idl/nested/corgi.thrift"),
            relative_path: PathBuf::from("nested/corgi.thrift"),
        };

        assert_eq!(
            generator.output_path(&file, false),
            PathBuf::from("out/nested/corgi.ts")
        );
        assert_eq!(
            generator.output_path(&file, true),
            PathBuf::from("out/schemas.ts")
        );
    }

    #[test]
    fn test_generate_file_lists_schemas() {
        let dir = TempDir::new().unwrap();
        let file = source(&dir, "corgi.thrift", "struct Corgi { 1: string name }\nstruct PackSchema {}");

        let generator = SchemaGenerator::new(config_in(dir.path()));
        let generated = generator
            .generate_file(&file, dir.path().join("corgi.ts"))
            .unwrap();

        assert_eq!(generated.schemas, vec!["CorgiSchema", "PackSchema"]);
        assert!(generated.content.contains("  name: z.string()\n"));
    }

    #[test]
    fn test_generate_skips_files_without_structs() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            source(&dir, "a.thrift", "struct A { 1: i32 id }"),
            source(&dir, "b.thrift", "enum B { X }"),
        ];

        let report = SchemaGenerator::new(config_in(dir.path()))
            .generate(&files, false)
            .unwrap();

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.skipped, vec![dir.path().join("b.thrift")]);
        assert_eq!(report.schema_count(), 1);
        assert_eq!(report.warnings().count(), 0);
    }

    #[test]
    fn test_generate_aborts_on_parse_error() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            source(&dir, "a.thrift", "struct A { 1: i32 id }"),
            source(&dir, "broken.thrift", "struct {"),
        ];

        let err = SchemaGenerator::new(config_in(dir.path()))
            .generate(&files, false)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::CliError::Generate(Error::Parse { .. })
        ));
    }
}
