//! # thrift-zod
//!
//! Generate TypeScript Zod schemas from Thrift IDL files.
//!
//! ```bash
//! # Convert one file into ./generated/schemas.ts
//! thrift-zod generate --input service.thrift
//!
//! # Convert a directory tree, one module per .thrift file
//! thrift-zod generate --input ./idl --output ./src/schemas
//!
//! # Preview without writing
//! thrift-zod generate --input ./idl --dry-run
//!
//! # Write a default thrift-zod.toml
//! thrift-zod init
//!
//! # Check a generated module is current
//! thrift-zod validate --path ./generated/schemas.ts --input service.thrift
//! ```
//!
//! Set `RUST_LOG=debug` for diagnostics on stderr.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use thrift_zod_cli::{
    config::{CliArgs, Config, ConfigManager},
    error::CliError,
    generator::SchemaGenerator,
    scanner::SourceScanner,
    writer::{FileWriter, WriteResult},
};

#[derive(Parser)]
#[command(name = "thrift-zod")]
#[command(author, version, about = "Generate TypeScript Zod schemas from Thrift IDL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Zod schemas from Thrift IDL files
    Generate {
        /// Input .thrift file or directory
        #[arg(short, long, default_value = ".")]
        input: PathBuf,

        /// Output directory for generated TypeScript files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Filter input files by path pattern (glob)
        #[arg(long)]
        filter: Option<String>,

        /// Ignore `optional` requiredness
        #[arg(long)]
        disable_optional_fields: bool,

        /// Emit `z.infer` type aliases
        #[arg(long)]
        types: bool,
    },

    /// Initialize a new thrift-zod configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "thrift-zod.toml")]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Validate that a generated module is up-to-date
    Validate {
        /// Path to the generated module
        #[arg(short, long)]
        path: PathBuf,

        /// The .thrift file it was generated from
        #[arg(short, long)]
        input: PathBuf,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Generate {
            input,
            output,
            dry_run,
            config,
            filter,
            disable_optional_fields,
            types,
        } => {
            let args = CliArgs {
                output,
                generate_types: types.then_some(true),
                disable_optional_fields: disable_optional_fields.then_some(true),
                ..Default::default()
            };
            let config = ConfigManager::merge_cli_args(ConfigManager::load(config.as_deref())?, &args);
            cmd_generate(&input, &config, filter.as_deref(), dry_run)
        }

        Commands::Init { output, force } => cmd_init(output, force),

        Commands::Validate {
            path,
            input,
            config,
        } => cmd_validate(&path, &input, config.as_deref()),
    }
}

/// Generate command implementation.
fn cmd_generate(
    input: &Path,
    config: &Config,
    filter: Option<&str>,
    dry_run: bool,
) -> Result<(), CliError> {
    println!("{}", "Scanning for Thrift files...".cyan());

    let mut scanner = SourceScanner::new(input);
    if let Some(pattern) = filter {
        scanner = scanner.with_filter(pattern)?;
    }
    let files = scanner.scan()?;
    println!("  Found {} Thrift file(s)", files.len().to_string().green());

    println!("{}", "Generating Zod schemas...".cyan());
    let generator = SchemaGenerator::new(config.clone());
    let report = generator.generate(&files, scanner.is_single_file())?;

    for (source, warning) in report.warnings() {
        println!("  {} {}: {}", "Warning:".yellow(), source.display(), warning);
    }
    for skipped in &report.skipped {
        println!(
            "  {} {} declares no structs, skipped",
            "Note:".yellow(),
            skipped.display()
        );
    }

    if report.files.is_empty() {
        return Err(thrift_zod::Error::EmptyInput.into());
    }

    println!(
        "  Generated {} schema(s)",
        report.schema_count().to_string().green()
    );

    let writer = FileWriter::new(dry_run);
    for file in &report.files {
        match writer.write(&file.output, &file.content)? {
            WriteResult::Written { path, bytes } => {
                println!(
                    "{} Written {} bytes to {}",
                    "✓".green(),
                    bytes,
                    path.display()
                );
            }
            WriteResult::Unchanged { path } => {
                println!("{} Unchanged {}", "✓".green(), path.display());
            }
            WriteResult::DryRun { path, content } => {
                println!(
                    "{} Would write to {}:",
                    "[dry-run]".yellow(),
                    path.display()
                );
                println!("{}", "─".repeat(60).dimmed());
                println!("{}", content);
                println!("{}", "─".repeat(60).dimmed());
            }
        }
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        return Err(CliError::ConfigExists { path: output });
    }

    std::fs::write(&output, ConfigManager::default_config_content())?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Validate command implementation.
fn cmd_validate(
    schema_path: &Path,
    input: &Path,
    config_path: Option<&Path>,
) -> Result<(), CliError> {
    println!("{}", "Validating schemas...".cyan());

    if !schema_path.exists() {
        return Err(CliError::SchemaNotFound {
            path: schema_path.to_path_buf(),
        });
    }

    let existing = std::fs::read_to_string(schema_path)?;
    let config = ConfigManager::load(config_path)?;
    let expected = SchemaGenerator::new(config).generate_content(input)?;

    if existing.trim() == expected.trim() {
        println!("{} Schemas are up-to-date", "✓".green());
        Ok(())
    } else {
        println!("{} Schemas are out of date", "✗".red());
        println!("  Run 'thrift-zod generate' to update");
        Err(CliError::Validation("Schemas are out of date".to_string()))
    }
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
