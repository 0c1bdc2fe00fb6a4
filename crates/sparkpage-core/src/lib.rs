//! # Sparkpage Core
//!
//! Core library for the sparkpage landing page generator.
//!
//! This crate turns a user's raw app idea into a typed, structured
//! presentation page by prompting an LLM chat backend and decoding its
//! JSON reply:
//!
//! - Prompt construction with a fixed instruction template
//! - A cancellable, single-shot generation pipeline
//! - JSON extraction from free-text model replies (fenced or inline)
//! - Strict decoding into [`GeneratedAppData`]
//! - The view state machine and illustration resolver for presentation
//!
//! ## Example
//!
//! ```rust,ignore
//! use sparkpage_core::{GenerationSession, Generator};
//! use sparkpage_ai::OpenAiChat;
//!
//! let provider = OpenAiChat::from_env()?;
//! let generator = Generator::new(provider);
//!
//! let mut session = GenerationSession::new();
//! let token = session.begin();
//! let page = generator.generate("a dog walking app", token).await?;
//! println!("{}", page.app_name);
//! ```

pub mod error;
pub mod extract;
pub mod illustration;
pub mod model;
pub mod pipeline;
pub mod prompt;
pub mod provider;
pub mod session;
pub mod state;

pub use error::{Result, SparkError, GENERIC_FAILURE_MESSAGE};
pub use illustration::Icon;
pub use model::{CallToAction, GeneratedAppData, Section};
pub use pipeline::Generator;
pub use provider::{ChatProvider, ProviderConfig};
pub use session::GenerationSession;
pub use state::ViewState;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        ChatProvider, GeneratedAppData, GenerationSession, Generator, ProviderConfig, Result,
        SparkError, ViewState,
    };
}
