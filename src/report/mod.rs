//! Terminal reporting for query and conversion results.

pub mod format;

pub use format::*;
