//! Ollama local provider implementation.
//!
//! Supports local LLM models through Ollama.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use sparkpage_core::{ChatProvider, Result, SparkError};

const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";

/// Ollama provider for local page generation.
#[derive(Debug, Clone)]
pub struct OllamaChat {
    client: Client,
    model: String,
    base_url: String,
}

/// Ollama generate request.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Ollama generate response.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaChat {
    /// Create a new Ollama provider with the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_options(model, DEFAULT_OLLAMA_URL)
    }

    /// Create a provider with a custom URL.
    pub fn with_options(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        // Local models can be slow.
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    /// Create from environment variables.
    ///
    /// Reads `OLLAMA_MODEL` and optionally `OLLAMA_URL`.
    pub fn from_env() -> Self {
        let model = std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3".to_string());
        let url = std::env::var("OLLAMA_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());
        Self::with_options(model, url)
    }

    async fn request(&self, prompt: &str) -> Result<String> {
        let api_request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| SparkError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SparkError::Provider(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let generate_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| SparkError::Provider(e.to_string()))?;

        Ok(generate_response.response)
    }
}

#[async_trait]
impl ChatProvider for OllamaChat {
    fn name(&self) -> &str {
        "ollama"
    }

    #[instrument(skip_all, fields(model = %self.model))]
    async fn send(&self, prompt: &str, cancel: CancellationToken) -> Result<String> {
        debug!("Requesting generation from Ollama");

        tokio::select! {
            _ = cancel.cancelled() => Err(SparkError::Cancelled),
            reply = self.request(prompt) => reply,
        }
    }
}
