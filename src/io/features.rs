//! Read/write feature JSON files.
//!
//! A feature file records the identifiers that were queried alongside the
//! features that came back. Reloading rebuilds each `ComplexFeature` from its
//! stored boundaries, so the apparent molecular weight is always recomputed.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ComplexFeature;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFile {
    pub tool: String,
    pub protein_ids: Vec<String>,
    pub features: Vec<ComplexFeature>,
}

impl FeatureFile {
    pub fn new(protein_ids: Vec<String>, features: Vec<ComplexFeature>) -> Self {
        Self {
            tool: "cf".to_string(),
            protein_ids,
            features,
        }
    }
}

/// Write a feature JSON file.
pub fn write_features_json(path: &Path, file: &FeatureFile) -> Result<(), AppError> {
    let out = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create feature JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(out, file)
        .map_err(|e| AppError::new(2, format!("Failed to write feature JSON: {e}")))?;
    Ok(())
}

/// Read a feature JSON file.
pub fn read_features_json(path: &Path) -> Result<FeatureFile, AppError> {
    let input = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open feature JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(input).map_err(|e| AppError::new(2, format!("Invalid feature JSON: {e}")))
}
