//! Configuration management for the CLI.
//!
//! Loads `thrift-zod.toml` and merges command-line overrides on top.

use crate::error::{CliResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thrift_zod::{EmitterConfig, GeneratorOptions};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "thrift-zod.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,

    /// Naming conventions.
    pub naming: NamingConfig,

    /// Generator options.
    pub features: GeneratorOptions,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for generated files.
    pub dir: PathBuf,

    /// Output filename when a single IDL file is converted.
    pub file: String,

    /// Whether to generate type inference exports.
    pub generate_types: bool,

    /// Whether to emit field annotations as JSDoc comments.
    pub generate_docs: bool,
}

/// Naming convention configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Suffix for schema names.
    pub schema_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./generated"),
            file: "schemas.ts".to_string(),
            generate_types: false,
            generate_docs: false,
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            schema_suffix: "Schema".to_string(),
        }
    }
}

impl Config {
    /// Emitter settings derived from this configuration.
    pub fn emitter_config(&self) -> EmitterConfig {
        EmitterConfig::default()
            .with_schema_suffix(self.naming.schema_suffix.clone())
            .with_types(self.output.generate_types)
            .with_docs(self.output.generate_docs)
    }

    /// Adapter options derived from this configuration.
    pub fn generator_options(&self) -> GeneratorOptions {
        self.features
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// Without a path the default location is tried. A missing file yields
    /// the default configuration.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path, e.to_string()))?;

        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if let Some(ref file) = args.output_file {
            config.output.file = file.clone();
        }

        if let Some(generate_types) = args.generate_types {
            config.output.generate_types = generate_types;
        }

        if let Some(generate_docs) = args.generate_docs {
            config.output.generate_docs = generate_docs;
        }

        if let Some(disable) = args.disable_optional_fields {
            config.features.disable_optional_fields = disable;
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# thrift-zod configuration file

[output]
# Output directory for generated TypeScript files
dir = "./generated"

# Output file name, used when a single .thrift file is converted
file = "schemas.ts"

# Whether to generate type inference exports (export type X = z.infer<typeof XSchema>)
generate_types = false

# Whether to emit Thrift field annotations as JSDoc comments
generate_docs = false

[naming]
# Schema name suffix (e.g., CorgiSchema)
schema_suffix = "Schema"

[features]
# Ignore `optional` requiredness instead of emitting .optional()
disable_optional_fields = false
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Output directory override.
    pub output: Option<PathBuf>,

    /// Output filename override.
    pub output_file: Option<String>,

    /// Generate types override.
    pub generate_types: Option<bool>,

    /// Generate docs override.
    pub generate_docs: Option<bool>,

    /// Optional field handling override.
    pub disable_optional_fields: Option<bool>,
}
