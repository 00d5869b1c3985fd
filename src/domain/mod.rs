//! Domain types: the complex feature entity.

pub mod feature;

pub use feature::*;
