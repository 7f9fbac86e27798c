//! HTTP fetch collaborator for the public creature API

use arena_core::FighterId;
use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::DexConfig;
use crate::error::FetchError;
use crate::payload::RawFighter;
use crate::source::FighterSource;

/// Fetches `{base_url}/pokemon/{id}` and decodes the JSON body
pub struct PokeApiSource {
    base_url: String,
    http_client: reqwest::Client,
}

impl PokeApiSource {
    pub fn new(config: &DexConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Source for the public API
    pub fn public() -> Self {
        Self::new(&DexConfig::default())
    }

    pub fn record_url(&self, id: &FighterId) -> String {
        format!("{}/pokemon/{}", self.base_url, id)
    }
}

#[async_trait]
impl FighterSource for PokeApiSource {
    async fn fetch(&self, id: &FighterId) -> Result<RawFighter, FetchError> {
        let url = self.record_url(id);

        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if let Some(err) = classify_status(status, id) {
            tracing::warn!("Fetch of {} failed with status {}", id, status);
            return Err(err);
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("failed to read body from {}: {}", url, e)))?;

        decode_payload(&body)
    }
}

/// Map a non-success status to its error kind
fn classify_status(status: StatusCode, id: &FighterId) -> Option<FetchError> {
    if status.is_success() {
        None
    } else if status == StatusCode::NOT_FOUND {
        Some(FetchError::NotFound(id.clone()))
    } else {
        Some(FetchError::Transport(format!("unexpected status {}", status)))
    }
}

fn decode_payload(body: &str) -> Result<RawFighter, FetchError> {
    serde_json::from_str(body)
        .map_err(|e| FetchError::Transport(format!("malformed payload: {}", e)))
}
