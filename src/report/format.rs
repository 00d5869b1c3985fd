//! Formatted terminal output.
//!
//! Formatting lives here so output changes stay localized and the query code
//! never prints.

use crate::domain::ComplexFeature;
use crate::math::{fraction_to_weight, weight_to_fraction};

const SUBUNITS_WIDTH: usize = 40;

/// Header plus feature table for a finished query.
pub fn format_query_summary(protein_ids: &[String], features: &[ComplexFeature]) -> String {
    let mut out = String::new();

    out.push_str("=== cf - complex features ===\n");
    out.push_str(&format!("Query: n={} ids\n", protein_ids.len()));
    out.push_str(&format!("Features: n={}\n\n", features.len()));
    out.push_str(&format_features(features));

    out
}

/// One row per feature, in the order given.
pub fn format_features(features: &[ComplexFeature]) -> String {
    if features.is_empty() {
        return "(no features)\n".to_string();
    }

    let mut out = String::new();
    out.push_str(
        format!(
            "{:>4} {:>8} {:>8} {:>11} {:>8} {:<w$}\n",
            "#", "left", "right", "apparent_mw", "score", "subunits",
            w = SUBUNITS_WIDTH
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<4} {:-<8} {:-<8} {:-<11} {:-<8} {:-<w$}\n",
            "", "", "", "", "", "",
            w = SUBUNITS_WIDTH
        )
        .trim_end(),
    );
    out.push('\n');

    for (i, f) in features.iter().enumerate() {
        out.push_str(
            format!(
                "{:>4} {:>8.2} {:>8.2} {:>11.3} {:>8.4} {:<w$}\n",
                i + 1,
                f.left_boundary(),
                f.right_boundary(),
                f.apparent_molecular_weight(),
                f.score(),
                truncate(&f.subunit_ids().join(";"), SUBUNITS_WIDTH),
                w = SUBUNITS_WIDTH
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

pub fn format_fraction_conversion(fraction: f64) -> String {
    format!(
        "SEC fraction {fraction} -> apparent MW {:.4}",
        fraction_to_weight(fraction)
    )
}

pub fn format_weight_conversion(weight: f64) -> String {
    format!(
        "MW {weight} -> SEC fraction {}",
        weight_to_fraction(weight)
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(left: f64, right: f64, ids: &[&str], score: f64) -> ComplexFeature {
        ComplexFeature::new(left, right, ids.iter().map(|s| s.to_string()).collect(), score)
    }

    #[test]
    fn table_keeps_feature_order() {
        let features = vec![
            feature(30.0, 34.0, &["B1", "B2"], 0.4),
            feature(2.0, 12.0, &["A1"], 0.95),
        ];
        let table = format_features(&features);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("apparent_mw"));
        assert!(lines[2].trim_start().starts_with("1 "));
        assert!(lines[2].ends_with("B1;B2"));
        assert!(lines[3].ends_with("A1"));
    }

    #[test]
    fn summary_reports_counts() {
        let ids = vec!["P1".to_string(), "P2".to_string()];
        let out = format_query_summary(&ids, &[]);
        assert!(out.contains("Query: n=2 ids"));
        assert!(out.contains("Features: n=0"));
        assert!(out.contains("(no features)"));
    }

    #[test]
    fn long_subunit_lists_are_truncated() {
        let s = "P".repeat(60);
        let t = truncate(&s, SUBUNITS_WIDTH);
        assert_eq!(t.chars().count(), SUBUNITS_WIDTH);
        assert!(t.ends_with('.'));
        assert_eq!(truncate("P1;P2", SUBUNITS_WIDTH), "P1;P2");
    }

    #[test]
    fn conversion_lines() {
        assert_eq!(format_weight_conversion(100.0), "MW 100 -> SEC fraction 98");
        assert!(format_fraction_conversion(5.0).starts_with("SEC fraction 5 -> apparent MW 53.4"));
    }
}
