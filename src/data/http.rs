//! HTTP transport used by the complex-feature query.
//!
//! The query only needs a single verb, so the seam is a small trait that
//! callers inject. `ReqwestClient` is the production implementation; tests
//! supply their own.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::ServiceConfig;
use crate::error::AppError;

/// A successful (2xx) response with its JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub data: Value,
}

/// A failed request.
///
/// `status` and `data` are present when the server answered; `data` holds the
/// body only if it parsed as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpFailure {
    pub status: Option<u16>,
    pub data: Option<Value>,
    pub message: String,
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn put(&self, path: &str, body: &Value) -> Result<HttpResponse, HttpFailure>;
}

pub struct ReqwestClient {
    client: Client,
    base_url: String,
}

impl ReqwestClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::new(2, format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, AppError> {
        Self::new(config.base_url.clone(), config.timeout)
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn put(&self, path: &str, body: &Value) -> Result<HttpResponse, HttpFailure> {
        let url = self.url(path);
        let resp = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| HttpFailure {
                status: None,
                data: None,
                message: format!("PUT {url} failed: {e}"),
            })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| HttpFailure {
            status: Some(status.as_u16()),
            data: None,
            message: format!("Failed to read response body from {url}: {e}"),
        })?;
        let parsed = serde_json::from_str::<Value>(&text);

        if !status.is_success() {
            return Err(HttpFailure {
                status: Some(status.as_u16()),
                data: parsed.ok(),
                message: format!("PUT {url} failed with status {status}."),
            });
        }

        match parsed {
            Ok(data) => Ok(HttpResponse {
                status: status.as_u16(),
                data,
            }),
            Err(e) => Err(HttpFailure {
                status: Some(status.as_u16()),
                data: None,
                message: format!("Invalid JSON from {url}: {e}"),
            }),
        }
    }
}
