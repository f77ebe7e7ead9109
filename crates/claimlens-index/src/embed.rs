//! Embedding collaborator: the only external, fallible step in indexing.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Text-embedding collaborator consumed by the indexer.
///
/// Implementations own their own transport concerns; the indexer catches
/// any error and proceeds without an embedding.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed_text(&self, text: &str) -> anyhow::Result<Vec<f32>>;
}

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
}

/// HTTP client for a remote embedding service.
///
/// Posts `{"text": ...}` to `{base_url}/api/embed` and expects
/// `{"embedding": [f32, ...]}`. Timeouts belong to the supplied
/// `reqwest::Client`; the indexer treats any failure as "no embedding".
pub struct HttpEmbedder {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

impl HttpEmbedder {
    /// `base_url` should be like `http://localhost:8600` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Use a caller-configured client (timeouts, proxies).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn request(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let url = format!("{}/api/embed", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(EmbedError::Server {
                status: status.as_u16(),
                body,
            });
        }
        let parsed: EmbedResponse = resp.json().await?;
        info!(dim = parsed.embedding.len(), "embedded document");
        Ok(parsed.embedding)
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed_text(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        Ok(self.request(text).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let embedder = HttpEmbedder::new("http://localhost:8600/".into());
        assert_eq!(embedder.base_url, "http://localhost:8600");
    }

    #[tokio::test]
    async fn unreachable_server_is_an_error_not_a_panic() {
        // Port 1 is never serving; the error surfaces through anyhow.
        let embedder = HttpEmbedder::new("http://127.0.0.1:1".into());
        assert!(embedder.embed_text("some text").await.is_err());
    }
}
