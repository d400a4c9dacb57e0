//! Fully resolved generation configuration.
//!
//! What the model backend actually consumes, after all overrides have been
//! applied. Immutable once created.

use super::config::{DecodingStrategy, GenerationConfig};

/// Generation configuration with all override layers applied.
#[derive(Debug, Clone)]
pub struct ResolvedGenerationConfig {
    pub(crate) inner: GenerationConfig,
}

impl ResolvedGenerationConfig {
    pub fn new(config: GenerationConfig) -> Self {
        Self { inner: config }
    }

    /// Consume and return the inner config.
    pub fn into_inner(self) -> GenerationConfig {
        self.inner
    }

    pub fn max_new_tokens(&self) -> Option<usize> {
        self.inner.max_new_tokens
    }

    pub fn is_sampling(&self) -> bool {
        matches!(self.inner.strategy, DecodingStrategy::Sample(_))
    }

    pub fn is_beam_search(&self) -> bool {
        matches!(self.inner.strategy, DecodingStrategy::BeamSearch(_))
    }

    pub fn is_greedy(&self) -> bool {
        matches!(self.inner.strategy, DecodingStrategy::Greedy)
    }
}

impl AsRef<GenerationConfig> for ResolvedGenerationConfig {
    fn as_ref(&self) -> &GenerationConfig {
        &self.inner
    }
}

impl From<GenerationConfig> for ResolvedGenerationConfig {
    fn from(config: GenerationConfig) -> Self {
        Self::new(config)
    }
}
