//! # Sparkpage AI
//!
//! Chat provider implementations for the sparkpage landing page generator.
//!
//! This crate provides ready-to-use chat backends:
//!
//! - **OpenAI**: chat completions API
//! - **Anthropic**: Claude messages API
//! - **Ollama**: local models
//!
//! ## Example
//!
//! ```rust,ignore
//! use sparkpage_ai::OpenAiChat;
//! use sparkpage_core::{GenerationSession, Generator};
//!
//! // One-line initialization from environment
//! let provider = OpenAiChat::from_env()?;
//!
//! let generator = Generator::new(provider);
//! let mut session = GenerationSession::new();
//! let page = generator.generate("a dog walking app", session.begin()).await?;
//! ```

pub mod anthropic;
pub mod ollama;
pub mod openai;

pub use anthropic::AnthropicChat;
pub use ollama::OllamaChat;
pub use openai::OpenAiChat;

/// Re-export core types for convenience.
pub use sparkpage_core::{ChatProvider, ProviderConfig, Result, SparkError};

/// Create an OpenAI provider with a single line.
///
/// # Example
///
/// ```rust,ignore
/// let provider = sparkpage_ai::openai("gpt-4o-mini")?;
/// ```
pub fn openai(model: &str) -> Result<OpenAiChat> {
    OpenAiChat::from_env_with_model(model)
}

/// Create an Anthropic provider with a single line.
pub fn anthropic(model: &str) -> Result<AnthropicChat> {
    AnthropicChat::from_env_with_model(model)
}

/// Create an Ollama provider with a single line.
pub fn ollama(model: &str) -> OllamaChat {
    OllamaChat::new(model)
}
