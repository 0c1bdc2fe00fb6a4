//! Caller-owned cancellation session for in-flight generations.

use tokio_util::sync::CancellationToken;

/// Owns the cancellation token for at most one in-flight generation.
///
/// `begin` first cancels and releases any previous token before minting a
/// fresh one, so a superseded generation can never be left running with no
/// way to cancel it. Dropping the session cancels the latest token, which
/// covers view teardown.
#[derive(Debug, Default)]
pub struct GenerationSession {
    token: Option<CancellationToken>,
}

impl GenerationSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding any previous one.
    ///
    /// Returns the token to hand to [`Generator::generate`].
    ///
    /// [`Generator::generate`]: crate::Generator::generate
    pub fn begin(&mut self) -> CancellationToken {
        self.cancel();
        let token = CancellationToken::new();
        self.token = Some(token.clone());
        token
    }

    /// Cancel the in-flight generation, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
    }

    /// Release the current token without cancelling, once a generation
    /// has settled on its own.
    pub fn finish(&mut self) {
        self.token = None;
    }

    /// Whether a generation token is currently live.
    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }
}

impl Drop for GenerationSession {
    fn drop(&mut self) {
        self.cancel();
    }
}
