//! User- and runtime-provided generation parameter overrides.
//!
//! These are not a full configuration; unset fields keep the layer below.

use serde::{Deserialize, Serialize};

/// Partial generation settings merged over the defaults at resolution time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GenerationOverrides {
    /// Sampling temperature (0.0 = deterministic, higher = more random).
    pub temperature: Option<f32>,

    /// Limit sampling to the top K tokens.
    pub top_k: Option<usize>,

    /// Nucleus sampling: tokens with cumulative probability <= top_p.
    pub top_p: Option<f32>,

    /// Penalty for repeating tokens (1.0 = no penalty).
    pub repetition_penalty: Option<f32>,

    /// Maximum number of new tokens to generate.
    pub max_new_tokens: Option<usize>,

    /// Sampling vs deterministic decoding.
    ///
    /// - `Some(false)` forces greedy decoding
    /// - `Some(true)` forces sampling
    /// - `None` keeps the default strategy
    pub do_sample: Option<bool>,

    /// Beam width; values > 1 enable beam search.
    pub num_beams: Option<usize>,

    /// Stop beam search when all beams have finished.
    pub early_stopping: Option<bool>,

    /// RNG seed for reproducible sampling.
    pub seed: Option<u64>,
}

impl GenerationOverrides {
    /// Overrides for deterministic greedy decoding.
    pub fn greedy() -> Self {
        Self {
            do_sample: Some(false),
            temperature: Some(0.0),
            ..Default::default()
        }
    }

    /// Overrides for looser, more varied output.
    pub fn creative() -> Self {
        Self {
            temperature: Some(0.95),
            top_p: Some(0.95),
            top_k: Some(50),
            ..Default::default()
        }
    }

    /// Overrides for tighter, more conservative output.
    pub fn precise() -> Self {
        Self {
            temperature: Some(0.3),
            top_p: Some(0.9),
            repetition_penalty: Some(1.1),
            ..Default::default()
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.top_k.is_none()
            && self.top_p.is_none()
            && self.repetition_penalty.is_none()
            && self.max_new_tokens.is_none()
            && self.do_sample.is_none()
            && self.num_beams.is_none()
            && self.early_stopping.is_none()
            && self.seed.is_none()
    }
}
