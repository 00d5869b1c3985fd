//! Conversions between SEC elution fractions and apparent molecular weight.
//!
//! The two directions come from separately fitted calibration curves:
//!
//! ```text
//! fraction -> weight:  ln(mw) = -0.0453 * fraction + 4.205
//! weight -> fraction:  round(ln(mw) - 9.682 / -0.104)
//! ```
//!
//! They are not inverses of each other and must not be "reconciled".

const FRACTION_SLOPE: f64 = -0.0453;
const FRACTION_INTERCEPT: f64 = 4.205;

const WEIGHT_NUMERATOR: f64 = 9.682;
const WEIGHT_DENOMINATOR: f64 = -0.104;

/// Approximate molecular weight for a SEC fraction.
///
/// Always positive for finite input.
pub fn fraction_to_weight(fraction: f64) -> f64 {
    let log_weight = FRACTION_SLOPE * fraction + FRACTION_INTERCEPT;
    log_weight.exp()
}

/// Approximate SEC fraction index for a molecular weight.
///
/// No validation: `weight <= 0` yields the logarithm's IEEE result
/// (`-inf` for zero, `NaN` for negatives) rounded as-is.
pub fn weight_to_fraction(weight: f64) -> f64 {
    round_half_up(weight.ln() - WEIGHT_NUMERATOR / WEIGHT_DENOMINATOR)
}

// Halves go toward +inf (-2.5 -> -2), unlike `f64::round`.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_to_weight_is_positive() {
        for f in [-500.0, -10.0, 0.0, 1.0, 5.0, 42.5, 100.0, 1e3] {
            let w = fraction_to_weight(f);
            assert!(w > 0.0, "weight for fraction {f} should be positive, got {w}");
        }
    }

    #[test]
    fn fraction_to_weight_matches_calibration() {
        assert!((fraction_to_weight(0.0) - 4.205_f64.exp()).abs() < 1e-12);
        // exp(4.205 - 0.2265) = exp(3.9785)
        assert!((fraction_to_weight(5.0) - 53.43).abs() < 0.01);
    }

    #[test]
    fn weight_to_fraction_is_integer_valued() {
        for w in [0.5, 1.0, 53.43, 100.0, 669.0, 12_345.6] {
            let f = weight_to_fraction(w);
            assert!(f.is_finite());
            assert_eq!(f.fract(), 0.0, "fraction for weight {w} should be integral, got {f}");
        }
        // ln(100) + 93.096... = 97.70 -> 98
        assert_eq!(weight_to_fraction(100.0), 98.0);
    }

    #[test]
    fn conversions_are_not_inverses() {
        let f = 5.0;
        let back = weight_to_fraction(fraction_to_weight(f));
        assert_ne!(back, f);
        assert_eq!(back, 97.0);
    }

    #[test]
    fn halves_round_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(97.07), 97.0);
    }

    #[test]
    fn non_positive_weight_propagates_log_failure() {
        assert_eq!(weight_to_fraction(0.0), f64::NEG_INFINITY);
        assert!(weight_to_fraction(-1.0).is_nan());
    }
}
