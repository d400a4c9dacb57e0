//! Text generation capability and its implementations.
//!
//! The facade holds one `TextGenerator`, selected once at construction:
//! [`ModelBackend`] when a pretrained model may be used, [`NullBackend`]
//! when the deployment is memory-constrained. Fallback is driven by the
//! tagged [`GenerationOutcome`] rather than by caught panics or errors;
//! the template composer in [`template`] is the landing spot for both
//! `Unavailable` and `TransientFailure`.

mod model;
mod null;
pub mod template;

pub use model::ModelBackend;
pub use null::NullBackend;
pub use template::TemplateComposer;

/// Result of one backend invocation.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// Raw generated text, still unnormalized.
    Success(String),
    /// The backend cannot produce text now or ever (no model loaded,
    /// memory-constrained mode, permanent load failure).
    Unavailable,
    /// This one call failed; the backend may succeed again later.
    TransientFailure(anyhow::Error),
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success(_))
    }
}

/// A source of raw generated text.
///
/// Implementations must be cheap to call when unavailable: the facade
/// invokes `produce` on every generation attempt and branches on the
/// outcome tag.
pub trait TextGenerator: Send + Sync {
    /// Attempt to generate a continuation of `prompt`.
    fn produce(&self, prompt: &str) -> GenerationOutcome;

    /// Short human-readable backend name, for logs.
    fn describe(&self) -> &str;
}
