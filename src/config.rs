//! Service configuration.
//!
//! Resolution order for the base URL: explicit value (CLI flag), then
//! `COMPLEX_FEATURES_URL` from the environment or a `.env` file.

use std::time::Duration;

use crate::error::AppError;

pub const ENV_BASE_URL: &str = "COMPLEX_FEATURES_URL";
pub const ENV_TIMEOUT_SECS: &str = "COMPLEX_FEATURES_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ServiceConfig {
    pub fn from_env(base_url: Option<String>) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::resolve(base_url, |key| std::env::var(key).ok())
    }

    /// Resolve against an arbitrary variable lookup.
    pub fn resolve(
        base_url: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let base_url = base_url
            .or_else(|| lookup(ENV_BASE_URL))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                AppError::new(
                    2,
                    format!("Missing service URL: pass --base-url or set {ENV_BASE_URL} (.env)."),
                )
            })?;

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::new(2, format!("Invalid {ENV_TIMEOUT_SECS} '{raw}': {e}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
