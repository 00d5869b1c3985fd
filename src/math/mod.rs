//! Numeric utilities: SEC fraction <-> molecular weight calibration.

pub mod calibration;

pub use calibration::*;
