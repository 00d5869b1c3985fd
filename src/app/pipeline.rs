//! The query workflow shared by `cf query` and any other front-end:
//! collect ids -> resolve config -> build transport -> query.

use tracing::info;

use crate::cli::QueryArgs;
use crate::config::ServiceConfig;
use crate::data::{ReqwestClient, query_features};
use crate::domain::ComplexFeature;
use crate::error::AppError;

/// Outputs of a single `cf query` run.
#[derive(Debug, Clone)]
pub struct QueryRun {
    pub protein_ids: Vec<String>,
    pub features: Vec<ComplexFeature>,
}

pub async fn run_query(args: &QueryArgs) -> Result<QueryRun, AppError> {
    let protein_ids = collect_ids(args)?;
    let config = ServiceConfig::from_env(args.base_url.clone())?;
    let client = ReqwestClient::from_config(&config)?;

    info!(base_url = %config.base_url, n_ids = protein_ids.len(), "running complex feature query");
    let features = query_features(&client, &protein_ids).await?;

    Ok(QueryRun {
        protein_ids,
        features,
    })
}

/// Positional ids first, then the ids file. Order and duplicates are kept.
pub fn collect_ids(args: &QueryArgs) -> Result<Vec<String>, AppError> {
    let mut ids = args.ids.clone();
    if let Some(path) = &args.ids_file {
        ids.extend(crate::io::read_ids_file(path)?);
    }
    if ids.is_empty() {
        return Err(AppError::new(2, "No protein ids given: pass IDs or --ids-file."));
    }
    Ok(ids)
}
