//! Chat provider trait and configuration.
//!
//! Defines the interface that chat backends must implement.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::{Result, SparkError};

/// Configuration for a chat provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key for authentication.
    pub api_key: String,

    /// Model identifier (e.g., "gpt-4o-mini", "claude-sonnet-4").
    pub model: String,

    /// Base URL override for the API endpoint.
    pub base_url: Option<String>,

    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Request timeout in seconds.
    pub timeout_seconds: Option<u64>,
}

impl ProviderConfig {
    /// Create a new provider config with API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
            max_tokens: None,
            temperature: None,
            timeout_seconds: None,
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set max tokens.
    pub fn with_max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    /// Set temperature.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp.clamp(0.0, 2.0));
        self
    }

    /// Set timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Load config from environment variables.
    ///
    /// Expected variables:
    /// - `SPARKPAGE_API_KEY` or `OPENAI_API_KEY`
    /// - `SPARKPAGE_MODEL` (defaults to "gpt-4o-mini")
    /// - `SPARKPAGE_BASE_URL` (optional)
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SPARKPAGE_API_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .map_err(|_| {
                SparkError::Config("SPARKPAGE_API_KEY or OPENAI_API_KEY must be set".to_string())
            })?;

        let model = std::env::var("SPARKPAGE_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let mut config = Self::new(api_key, model);

        if let Ok(url) = std::env::var("SPARKPAGE_BASE_URL") {
            config = config.with_base_url(url);
        }

        Ok(config)
    }
}

/// Trait that chat backends must implement.
///
/// One full prompt in, one complete reply out; replies are never consumed
/// as a stream. Implementations must observe the cancellation token and
/// abort the underlying transport when it fires, resolving to
/// [`SparkError::Cancelled`].
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &str;

    /// Send a prompt and await the complete reply.
    async fn send(&self, prompt: &str, cancel: CancellationToken) -> Result<String>;
}

#[async_trait]
impl<P: ChatProvider + ?Sized> ChatProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn send(&self, prompt: &str, cancel: CancellationToken) -> Result<String> {
        (**self).send(prompt, cancel).await
    }
}

/// A scripted provider for testing.
#[derive(Debug, Default)]
pub struct MockChat {
    reply: Option<String>,
    pending: bool,
    calls: std::sync::atomic::AtomicUsize,
}

impl MockChat {
    /// Create a mock that replies with an empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the reply text.
    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = Some(reply.into());
        self
    }

    /// Create a mock that never resolves until its token is cancelled.
    pub fn pending() -> Self {
        Self {
            pending: true,
            ..Self::default()
        }
    }

    /// How many times `send` has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatProvider for MockChat {
    fn name(&self) -> &str {
        "mock"
    }

    async fn send(&self, _prompt: &str, cancel: CancellationToken) -> Result<String> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        if self.pending {
            cancel.cancelled().await;
            return Err(SparkError::Cancelled);
        }
        if cancel.is_cancelled() {
            return Err(SparkError::Cancelled);
        }
        Ok(self.reply.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_returns_scripted_reply() {
        let provider = MockChat::new().with_reply("hello");
        let reply = provider
            .send("anything", CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(reply, "hello");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn pending_mock_resolves_cancelled_when_token_fires() {
        let provider = MockChat::pending();
        let token = CancellationToken::new();
        token.cancel();
        let err = provider.send("anything", token).await.unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn config_builders_compose() {
        let config = ProviderConfig::new("key", "model")
            .with_base_url("http://localhost:9999")
            .with_max_tokens(2048)
            .with_temperature(3.5)
            .with_timeout(30);
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9999"));
        assert_eq!(config.max_tokens, Some(2048));
        // Temperature clamps to the valid range.
        assert_eq!(config.temperature, Some(2.0));
        assert_eq!(config.timeout_seconds, Some(30));
    }
}
