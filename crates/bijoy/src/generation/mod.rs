//! Generation hyperparameter configuration.
//!
//! Three layers merge into what the backend actually consumes:
//! system defaults, user overrides set on the builder, and per-call
//! runtime overrides. Precedence is runtime > user > defaults.

mod config;
mod overrides;
mod resolution;
mod resolved;

pub use config::{BeamSearchParams, DecodingStrategy, GenerationConfig, SamplingParams};
pub use overrides::GenerationOverrides;
pub use resolution::resolve_generation_config;
pub use resolved::ResolvedGenerationConfig;
