//! Backend used when model-backed generation is disabled.

use log::debug;

use super::{GenerationOutcome, TextGenerator};

/// Always-unavailable backend.
///
/// Selected at construction time for memory-constrained deployments, so no
/// model-loading code path is ever reached.
pub struct NullBackend {
    reason: String,
}

impl NullBackend {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl TextGenerator for NullBackend {
    fn produce(&self, _prompt: &str) -> GenerationOutcome {
        debug!("model generation disabled ({})", self.reason);
        GenerationOutcome::Unavailable
    }

    fn describe(&self) -> &str {
        "null"
    }
}
