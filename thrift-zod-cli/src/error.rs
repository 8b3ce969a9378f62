//! Error types for the CLI.
//!
//! Library failures are wrapped as [`CliError::Generate`]; the rest cover
//! scanning, configuration and output.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error during input discovery.
    #[error("Failed to scan input: {0}")]
    Scan(#[from] ScanError),

    /// Error while converting an IDL file.
    #[error("Failed to generate schemas: {0}")]
    Generate(#[from] thrift_zod::Error),

    /// Error loading configuration.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error writing output files.
    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),

    /// Validation failed (schemas out of date).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// `init` target exists and `--force` was not given.
    #[error("Configuration file already exists: {} (use --force to overwrite)", .path.display())]
    ConfigExists { path: PathBuf },

    /// Schema file to validate does not exist.
    #[error("Schema file not found: {}", .path.display())]
    SchemaNotFound { path: PathBuf },

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during input discovery.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Input path does not exist.
    #[error("Input not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// No Thrift files found under the input directory.
    #[error("No Thrift files found in: {}", .path.display())]
    NoThriftFiles { path: PathBuf },

    /// Invalid filter pattern.
    #[error("Invalid filter pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Error from ignore crate walker.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid TOML syntax or schema.
    #[error("Invalid TOML in {}: {message}", .path.display())]
    InvalidToml { path: PathBuf, message: String },

    /// IO error reading config.
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create directory.
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("Failed to write file {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Process exit code: 2 for stale output, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation(_) => 2,
            _ => 1,
        }
    }
}

impl ScanError {
    /// Create a not found error.
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    /// Create a no Thrift files error.
    pub fn no_thrift_files(path: PathBuf) -> Self {
        Self::NoThriftFiles { path }
    }

    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Create an invalid TOML error.
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_error_is_wrapped() {
        let err: CliError = thrift_zod::Error::EmptyInput.into();
        assert_eq!(
            err.to_string(),
            "Failed to generate schemas: No struct schemas to emit"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Validation("Schemas are out of date".into()).exit_code(), 2);

        let exists = CliError::ConfigExists {
            path: PathBuf::from("thrift-zod.toml"),
        };
        assert_eq!(exists.exit_code(), 1);
        assert_eq!(
            exists.to_string(),
            "Configuration file already exists: thrift-zod.toml (use --force to overwrite)"
        );

        let missing = CliError::SchemaNotFound {
            path: PathBuf::from("schemas.ts"),
        };
        assert_eq!(missing.exit_code(), 1);
        assert_eq!(missing.to_string(), "Schema file not found: schemas.ts");

        let scan: CliError = ScanError::not_found(PathBuf::from("idl")).into();
        assert_eq!(scan.exit_code(), 1);
    }

    #[test]
    fn test_scan_error_display() {
        let err = ScanError::invalid_pattern("[", "unclosed");
        assert_eq!(err.to_string(), "Invalid filter pattern '[': unclosed");
    }
}
