//! `complex-features` library crate.
//!
//! Models co-eluting protein complex features, converts between SEC fraction
//! and apparent molecular weight, and queries the analysis service for the
//! features of a set of UniProt identifiers. The `cf` binary is a thin wrapper
//! around this library.

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;

pub use data::{HttpClient, query_features};
pub use domain::ComplexFeature;
pub use error::QueryError;
pub use math::{fraction_to_weight, weight_to_fraction};
