//! Remote data access: the analysis service and its HTTP transport.

pub mod features;
pub mod http;

pub use features::*;
pub use http::*;
