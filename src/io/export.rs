//! Export features to CSV.
//!
//! One row per feature, in query order, for spreadsheets or downstream scripts.

use std::io::Write;
use std::path::Path;

use crate::domain::ComplexFeature;
use crate::error::AppError;

const HEADER: [&str; 5] = ["left_sec", "right_sec", "apparent_mw", "score", "subgroup"];

/// Write features to a CSV file.
pub fn write_features_csv(path: &Path, features: &[ComplexFeature]) -> Result<(), AppError> {
    let writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_csv(writer, features)
}

/// Render features as CSV text (used for `--format csv`).
pub fn features_to_csv_string(features: &[ComplexFeature]) -> Result<String, AppError> {
    let mut buf = Vec::new();
    write_csv(csv::Writer::from_writer(&mut buf), features)?;
    String::from_utf8(buf).map_err(|e| AppError::new(2, format!("CSV output is not UTF-8: {e}")))
}

fn write_csv<W: Write>(mut writer: csv::Writer<W>, features: &[ComplexFeature]) -> Result<(), AppError> {
    writer
        .write_record(HEADER)
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for f in features {
        writer
            .write_record([
                f.left_boundary().to_string(),
                f.right_boundary().to_string(),
                format!("{:.6}", f.apparent_molecular_weight()),
                f.score().to_string(),
                f.subunit_ids().join(";"),
            ])
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_follow_feature_order() {
        let features = vec![
            ComplexFeature::new(10.0, 20.0, vec!["P1".into(), "P2".into()], 0.9),
            ComplexFeature::new(1.5, 3.0, vec!["Q1".into()], 0.25),
        ];
        let out = features_to_csv_string(&features).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "left_sec,right_sec,apparent_mw,score,subgroup");
        assert!(lines[1].starts_with("10,20,53.43"));
        assert!(lines[1].ends_with(",0.9,P1;P2"));
        assert!(lines[2].starts_with("1.5,3,"));
        assert!(lines[2].ends_with(",0.25,Q1"));
    }

    #[test]
    fn writes_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("features.csv");
        let features = vec![ComplexFeature::new(0.0, 2.0, vec!["P1".into()], 1.0)];

        write_features_csv(&path, &features).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 2);
    }
}
