//! Top-level application orchestration.
//!
//! `src/main.rs` only maps the result to an exit code; this module parses the
//! CLI, sets up logging, and dispatches to the query/convert/show handlers.

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::{Command, ConvertArgs, OutputFormat, QueryArgs, ShowArgs};
use crate::domain::ComplexFeature;
use crate::error::AppError;
use crate::io::FeatureFile;

pub mod pipeline;

/// Entry point for the `cf` binary.
pub async fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    init_logging(cli.log_level)?;

    match cli.command {
        Command::Query(args) => handle_query(args).await,
        Command::Convert(args) => handle_convert(args),
        Command::Show(args) => handle_show(args),
    }
}

fn init_logging(level: Level) -> Result<(), AppError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::new(2, format!("Failed to initialise logging: {e}")))
}

async fn handle_query(args: QueryArgs) -> Result<(), AppError> {
    let run = pipeline::run_query(&args).await?;

    print_features(&run.protein_ids, &run.features, args.format)?;

    if let Some(path) = &args.export {
        crate::io::write_features_csv(path, &run.features)?;
    }
    if let Some(path) = &args.export_json {
        let file = FeatureFile::new(run.protein_ids, run.features);
        crate::io::write_features_json(path, &file)?;
    }

    Ok(())
}

fn handle_convert(args: ConvertArgs) -> Result<(), AppError> {
    match (args.fraction, args.weight) {
        (Some(fraction), _) => println!("{}", crate::report::format_fraction_conversion(fraction)),
        (None, Some(weight)) => println!("{}", crate::report::format_weight_conversion(weight)),
        (None, None) => return Err(AppError::new(2, "Pass --fraction or --weight.")),
    }
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let file = crate::io::read_features_json(&args.file)?;
    print_features(&file.protein_ids, &file.features, args.format)
}

fn print_features(
    protein_ids: &[String],
    features: &[ComplexFeature],
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Table => {
            print!("{}", crate::report::format_query_summary(protein_ids, features));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(features)
                .map_err(|e| AppError::new(2, format!("Failed to encode features as JSON: {e}")))?;
            println!("{json}");
        }
        OutputFormat::Csv => {
            print!("{}", crate::io::features_to_csv_string(features)?);
        }
    }
    Ok(())
}
