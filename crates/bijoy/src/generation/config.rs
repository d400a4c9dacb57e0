//! Base generation configuration and decoding strategies.

use serde::{Deserialize, Serialize};

/// Parameters for sampling-based decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    /// Softmax temperature. 0.0 degenerates to greedy decoding.
    pub temperature: f32,
    /// Restrict sampling to the K most likely tokens.
    pub top_k: Option<usize>,
    /// Nucleus sampling threshold.
    pub top_p: Option<f32>,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            top_k: Some(50),
            top_p: Some(0.92),
        }
    }
}

/// Parameters for beam search decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSearchParams {
    /// Beam width. Values > 1 enable beam search.
    pub num_beams: usize,
    /// Stop when all beams have finished.
    pub early_stopping: bool,
}

impl Default for BeamSearchParams {
    fn default() -> Self {
        Self {
            num_beams: 4,
            early_stopping: true,
        }
    }
}

/// How the next token is chosen during decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DecodingStrategy {
    Greedy,
    Sample(SamplingParams),
    BeamSearch(BeamSearchParams),
}

/// Fully specified generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum tokens generated beyond the prompt.
    pub max_new_tokens: Option<usize>,
    /// Penalty applied to already-seen tokens (1.0 = no penalty).
    pub repetition_penalty: f32,
    /// Decoding strategy with its parameters.
    pub strategy: DecodingStrategy,
    /// RNG seed for sampling. `None` means a fresh seed per call.
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: Some(100),
            repetition_penalty: 1.2,
            strategy: DecodingStrategy::Sample(SamplingParams::default()),
            seed: None,
        }
    }
}
