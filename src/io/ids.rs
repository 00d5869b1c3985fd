//! Reading UniProt identifier lists.

use std::fs;
use std::path::Path;

use crate::error::AppError;

/// Read identifiers from a file, one per line.
///
/// Blank lines and `#` comments are skipped; everything else is kept in file
/// order, duplicates included.
pub fn read_ids_file(path: &Path) -> Result<Vec<String>, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::new(2, format!("Failed to read ids file '{}': {e}", path.display())))?;
    Ok(parse_ids(&raw))
}

pub fn parse_ids(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
