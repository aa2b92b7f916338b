use async_trait::async_trait;
use log::{debug, warn};

use super::error::FetchError;

/// The HTTP collaborator: one GET, body decoded as JSON.
///
/// A trait so the runner can be driven by a stub in tests and by
/// `HttpFetcher` in the terminal app.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError>;
}

/// `JsonFetcher` backed by a shared `reqwest::Client`.
#[derive(Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("GET {} -> {}", url, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("GET {} failed: {} - {}", url, status, err_body);
            return Err(FetchError::Api {
                status,
                message: err_body,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}
