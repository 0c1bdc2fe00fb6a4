//! The generation pipeline: prompt → chat call → extraction → typed decode.
//!
//! This module provides the high-level API for turning a raw app idea into
//! [`GeneratedAppData`] through a single cancellable provider call.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::{extract, prompt, ChatProvider, GeneratedAppData, Result, SparkError};

/// Orchestrates a single page generation against a chat provider.
///
/// # Example
///
/// ```rust,ignore
/// use sparkpage_core::{GenerationSession, Generator};
/// use sparkpage_ai::OpenAiChat;
///
/// let generator = Generator::new(OpenAiChat::from_env()?);
/// let mut session = GenerationSession::new();
/// let page = generator.generate("a dog walking app", session.begin()).await?;
/// ```
pub struct Generator<P: ChatProvider> {
    provider: Arc<P>,
}

impl<P: ChatProvider> Generator<P> {
    /// Create a new generator with the given provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// The wrapped provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generate page data for a raw app idea.
    ///
    /// Makes exactly one outbound provider call per invocation and never
    /// retries; a failed generation requires a fresh call. An empty idea
    /// fails fast with [`SparkError::EmptyInput`] before any network
    /// traffic, and a fired token resolves to [`SparkError::Cancelled`]
    /// with nothing surfaced to the user.
    #[instrument(skip_all, fields(provider = self.provider.name()))]
    pub async fn generate(
        &self,
        raw_idea: &str,
        cancel: CancellationToken,
    ) -> Result<GeneratedAppData> {
        let idea = raw_idea.trim();
        if idea.is_empty() {
            return Err(SparkError::EmptyInput);
        }

        let prompt = prompt::build_prompt(idea);
        debug!("Sending generation prompt ({} chars)", prompt.len());

        let reply = self.provider.send(&prompt, cancel).await?;
        if reply.trim().is_empty() {
            return Err(SparkError::EmptyResponse);
        }

        let json = extract::extract_json(&reply)?;
        let page = GeneratedAppData::from_json(json)?;

        info!("Generated page for app: {}", page.app_name);
        Ok(page)
    }
}
