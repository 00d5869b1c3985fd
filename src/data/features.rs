//! Complex-feature retrieval from the analysis service.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::data::http::{HttpClient, HttpFailure};
use crate::domain::ComplexFeature;
use crate::error::QueryError;

pub const COMPLEX_FEATURES_PATH: &str = "/api/complexfeatures";

#[derive(Debug, Deserialize)]
struct FeaturesResponse {
    features: Vec<FeatureRecord>,
}

#[derive(Debug, Deserialize)]
struct FeatureRecord {
    left_sec: f64,
    right_sec: f64,
    subgroup: String,
    score: f64,
}

/// Fetch the subgroup features detected for `protein_ids`.
///
/// Identifiers are sent verbatim (no dedup, no validation) in a single
/// `PUT /api/complexfeatures`. Features come back in the service's order.
/// On failure the service's `error` payload is returned as
/// [`QueryError::Service`] with no other response metadata attached.
pub async fn query_features<C>(client: &C, protein_ids: &[String]) -> Result<Vec<ComplexFeature>, QueryError>
where
    C: HttpClient + ?Sized,
{
    let body = json!({ "uniprot_ids": protein_ids });
    debug!(n_ids = protein_ids.len(), path = COMPLEX_FEATURES_PATH, "querying complex features");

    let resp = client
        .put(COMPLEX_FEATURES_PATH, &body)
        .await
        .map_err(service_error)?;

    let features = map_features(resp.data)?;
    debug!(status = resp.status, n_features = features.len(), "complex features received");
    Ok(features)
}

fn service_error(failure: HttpFailure) -> QueryError {
    warn!(status = ?failure.status, "{}", failure.message);
    let value = failure
        .data
        .and_then(|mut data| data.get_mut("error").map(Value::take))
        .unwrap_or(Value::Null);
    QueryError::Service(value)
}

fn map_features(mut data: Value) -> Result<Vec<ComplexFeature>, QueryError> {
    if data.get("features").is_none()
        && let Some(error) = data.get_mut("error")
    {
        warn!("service reported an error with a success status");
        return Err(QueryError::Service(error.take()));
    }

    let parsed: FeaturesResponse =
        serde_json::from_value(data).map_err(|e| QueryError::MalformedResponse(e.to_string()))?;

    parsed
        .features
        .into_iter()
        .enumerate()
        .map(|(i, f)| {
            if f.subgroup.is_empty() {
                return Err(QueryError::MalformedResponse(format!("feature {i} has an empty subgroup")));
            }
            let subunit_ids = f.subgroup.split(';').map(str::to_string).collect();
            Ok(ComplexFeature::new(f.left_sec, f.right_sec, subunit_ids, f.score))
        })
        .collect()
}
