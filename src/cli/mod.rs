//! Command-line parsing for the complex-feature client.
//!
//! Parsing and dispatch live apart from the query and conversion code so the
//! library stays usable without the binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::Level;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "cf", version, about = "Query co-elution complex features from the analysis service")]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the complex features detected for a set of UniProt identifiers.
    Query(QueryArgs),
    /// Convert between SEC fraction and apparent molecular weight.
    Convert(ConvertArgs),
    /// Print features from a file written by `cf query --export-json`.
    Show(ShowArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Parser, Clone)]
pub struct QueryArgs {
    /// UniProt identifiers to query.
    #[arg(value_name = "ID")]
    pub ids: Vec<String>,

    /// File with additional identifiers, one per line (`#` starts a comment).
    #[arg(long, value_name = "PATH")]
    pub ids_file: Option<PathBuf>,

    /// Service base URL (overrides COMPLEX_FEATURES_URL).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Output format on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Export features to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export features (with the query ids) to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

#[derive(Debug, Args, Clone, Copy)]
#[group(required = true, multiple = false)]
pub struct ConvertArgs {
    /// SEC fraction to convert to an apparent molecular weight.
    #[arg(long, allow_negative_numbers = true)]
    pub fraction: Option<f64>,

    /// Molecular weight to convert to a SEC fraction.
    #[arg(long, allow_negative_numbers = true)]
    pub weight: Option<f64>,
}

#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Feature JSON file produced by `cf query --export-json`.
    #[arg(long, value_name = "JSON")]
    pub file: PathBuf,

    /// Output format on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}
