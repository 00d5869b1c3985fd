//! The complex feature entity.

use serde::{Deserialize, Serialize};

use crate::math::fraction_to_weight;

/// A complex/subgroup feature detected server-side by the sliding-window
/// clustering algorithm.
///
/// Immutable after construction. The apparent molecular weight is derived from
/// the boundaries in [`ComplexFeature::new`] and cannot be set on its own; the
/// `Deserialize` impl goes through `new` as well, so a stored weight is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FeatureFields")]
pub struct ComplexFeature {
    left_boundary: f64,
    right_boundary: f64,
    subunit_ids: Vec<String>,
    score: f64,
    apparent_molecular_weight: f64,
}

impl ComplexFeature {
    pub fn new(left_boundary: f64, right_boundary: f64, subunit_ids: Vec<String>, score: f64) -> Self {
        // Half-width of the elution window, not its midpoint.
        let apparent_molecular_weight = fraction_to_weight((right_boundary - left_boundary) / 2.0);
        Self {
            left_boundary,
            right_boundary,
            subunit_ids,
            score,
            apparent_molecular_weight,
        }
    }

    /// SEC fraction forming the left boundary.
    pub fn left_boundary(&self) -> f64 {
        self.left_boundary
    }

    /// SEC fraction forming the right boundary.
    pub fn right_boundary(&self) -> f64 {
        self.right_boundary
    }

    /// UniProt identifiers of the subunits, in the order received.
    pub fn subunit_ids(&self) -> &[String] {
        &self.subunit_ids
    }

    /// Intra-group correlation score.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn apparent_molecular_weight(&self) -> f64 {
        self.apparent_molecular_weight
    }
}

#[derive(Deserialize)]
struct FeatureFields {
    left_boundary: f64,
    right_boundary: f64,
    subunit_ids: Vec<String>,
    score: f64,
}

impl From<FeatureFields> for ComplexFeature {
    fn from(f: FeatureFields) -> Self {
        ComplexFeature::new(f.left_boundary, f.right_boundary, f.subunit_ids, f.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn weight_uses_half_width() {
        let f = ComplexFeature::new(10.0, 20.0, ids(&["P1", "P2"]), 0.9);
        assert_eq!(f.apparent_molecular_weight(), fraction_to_weight(5.0));
        assert_ne!(f.apparent_molecular_weight(), fraction_to_weight(15.0));
    }

    #[test]
    fn inputs_are_stored_verbatim() {
        let f = ComplexFeature::new(20.0, 10.0, ids(&["Q9", "P1", "Q9"]), -0.25);
        assert_eq!(f.left_boundary(), 20.0);
        assert_eq!(f.right_boundary(), 10.0);
        assert_eq!(f.subunit_ids(), ["Q9", "P1", "Q9"]);
        assert_eq!(f.score(), -0.25);
        // Reversed boundaries give a negative half-width; still well defined.
        assert_eq!(f.apparent_molecular_weight(), fraction_to_weight(-5.0));
    }

    #[test]
    fn deserialize_recomputes_weight() {
        let raw = r#"{
            "left_boundary": 10.0,
            "right_boundary": 20.0,
            "subunit_ids": ["P1", "P2"],
            "score": 0.9,
            "apparent_molecular_weight": 1.0
        }"#;
        let f: ComplexFeature = serde_json::from_str(raw).unwrap();
        assert_eq!(f, ComplexFeature::new(10.0, 20.0, ids(&["P1", "P2"]), 0.9));
        assert_eq!(f.apparent_molecular_weight(), fraction_to_weight(5.0));
    }

    #[test]
    fn serializes_derived_weight() {
        let f = ComplexFeature::new(10.0, 20.0, ids(&["P1"]), 0.5);
        let value = serde_json::to_value(&f).unwrap();
        assert_eq!(value["apparent_molecular_weight"], serde_json::json!(fraction_to_weight(5.0)));
        assert_eq!(value["subunit_ids"], serde_json::json!(["P1"]));
    }
}
