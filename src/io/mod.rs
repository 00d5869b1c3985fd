//! Input/output helpers.
//!
//! - identifier lists (`ids`)
//! - CSV export (`export`)
//! - feature JSON read/write (`features`)

pub mod export;
pub mod features;
pub mod ids;

pub use export::*;
pub use features::*;
pub use ids::*;
