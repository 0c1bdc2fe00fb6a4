//! Error types for Sparkpage Core.

use thiserror::Error;

/// Result type alias for sparkpage operations.
pub type Result<T> = std::result::Result<T, SparkError>;

/// The single message shown to the user for any non-cancellation failure.
///
/// All failure kinds collapse into this one string at the presentation
/// layer; the distinct variants exist for logs and tests.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Sorry, the AI failed to generate a design. It might be a bit busy. Please try again.";

/// Main error type for the sparkpage generation pipeline.
#[derive(Debug, Error)]
pub enum SparkError {
    /// The app idea was empty after trimming whitespace.
    #[error("App idea is empty")]
    EmptyInput,

    /// The in-flight generation was cancelled via its token.
    #[error("Generation cancelled")]
    Cancelled,

    /// The model completed but returned an empty reply.
    #[error("Model returned an empty reply")]
    EmptyResponse,

    /// No JSON object could be located in the model reply.
    #[error("Model reply contained no JSON object")]
    NoJsonFound,

    /// The extracted JSON span failed to parse.
    #[error("Model reply contained malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    /// The JSON parsed but did not match the expected page shape.
    #[error("Model JSON does not match the page schema: {0}")]
    SchemaMismatch(#[source] serde_json::Error),

    /// The chat backend rejected the request.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Network request failed.
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SparkError {
    /// Whether this outcome is a silent cancellation rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SparkError::Cancelled)
    }

    /// The message to surface to the user, if any.
    ///
    /// Cancellations surface nothing; every other kind maps to the one
    /// generic failure message.
    pub fn user_message(&self) -> Option<&'static str> {
        if self.is_cancelled() {
            None
        } else {
            Some(GENERIC_FAILURE_MESSAGE)
        }
    }
}
