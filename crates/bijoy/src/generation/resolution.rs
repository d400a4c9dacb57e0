//! Generation configuration resolution.
//!
//! Merges system defaults, user overrides, and runtime overrides into a
//! fully resolved configuration.

use super::config::{BeamSearchParams, DecodingStrategy, GenerationConfig, SamplingParams};
use super::overrides::GenerationOverrides;
use super::resolved::ResolvedGenerationConfig;

/// Merge defaults, user overrides, and runtime overrides.
///
/// # Precedence (highest to lowest)
///
/// 1. Runtime overrides
/// 2. User overrides
/// 3. Defaults
///
/// # Strategy resolution
///
/// - `num_beams > 1` forces beam search
/// - `do_sample = Some(false)` forces greedy
/// - `do_sample = Some(true)` forces sampling
/// - otherwise the default strategy is kept
pub fn resolve_generation_config(
    defaults: GenerationConfig,
    user: &GenerationOverrides,
    runtime: &GenerationOverrides,
) -> ResolvedGenerationConfig {
    let mut config = defaults;

    // Step 1: resolve the decoding strategy.
    let force_beams = runtime
        .num_beams
        .or(user.num_beams)
        .map(|b| b > 1)
        .unwrap_or(false);
    let force_greedy = runtime.do_sample.or(user.do_sample) == Some(false);
    let force_sampling = runtime.do_sample.or(user.do_sample) == Some(true);

    config.strategy = if force_beams {
        let base = match &config.strategy {
            DecodingStrategy::BeamSearch(p) => p.clone(),
            _ => BeamSearchParams::default(),
        };
        DecodingStrategy::BeamSearch(base)
    } else if force_greedy {
        DecodingStrategy::Greedy
    } else if force_sampling {
        let base = match &config.strategy {
            DecodingStrategy::Sample(p) => p.clone(),
            _ => SamplingParams::default(),
        };
        DecodingStrategy::Sample(base)
    } else {
        config.strategy
    };

    // Step 2: scalar overrides common to all strategies.
    if let Some(v) = runtime.max_new_tokens.or(user.max_new_tokens) {
        config.max_new_tokens = Some(v);
    }
    if let Some(v) = runtime.repetition_penalty.or(user.repetition_penalty) {
        config.repetition_penalty = v;
    }
    if let Some(v) = runtime.seed.or(user.seed) {
        config.seed = Some(v);
    }

    // Step 3: strategy-specific overrides.
    match &mut config.strategy {
        DecodingStrategy::Sample(params) => {
            if let Some(v) = runtime.temperature.or(user.temperature) {
                params.temperature = v;
            }
            if let Some(v) = runtime.top_k.or(user.top_k) {
                params.top_k = Some(v);
            }
            if let Some(v) = runtime.top_p.or(user.top_p) {
                params.top_p = Some(v);
            }
        }

        DecodingStrategy::BeamSearch(params) => {
            if let Some(v) = runtime.num_beams.or(user.num_beams) {
                params.num_beams = v;
            }
            if let Some(v) = runtime.early_stopping.or(user.early_stopping) {
                params.early_stopping = v;
            }
        }

        DecodingStrategy::Greedy => {}
    }

    ResolvedGenerationConfig::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let defaults = GenerationConfig::default();
        let resolved = resolve_generation_config(
            defaults.clone(),
            &GenerationOverrides::default(),
            &GenerationOverrides::default(),
        );

        assert_eq!(resolved.max_new_tokens(), defaults.max_new_tokens);
        assert!(resolved.is_sampling());
    }

    #[test]
    fn test_user_override_applies() {
        let user = GenerationOverrides {
            temperature: Some(0.5),
            max_new_tokens: Some(64),
            ..Default::default()
        };
        let resolved = resolve_generation_config(
            GenerationConfig::default(),
            &user,
            &GenerationOverrides::default(),
        );

        assert_eq!(resolved.max_new_tokens(), Some(64));
        match &resolved.as_ref().strategy {
            DecodingStrategy::Sample(p) => assert_eq!(p.temperature, 0.5),
            other => panic!("expected sampling strategy, got {other:?}"),
        }
    }

    #[test]
    fn test_runtime_overrides_user() {
        let user = GenerationOverrides {
            temperature: Some(0.5),
            ..Default::default()
        };
        let runtime = GenerationOverrides {
            temperature: Some(0.9),
            ..Default::default()
        };
        let resolved = resolve_generation_config(GenerationConfig::default(), &user, &runtime);

        match &resolved.as_ref().strategy {
            DecodingStrategy::Sample(p) => assert_eq!(p.temperature, 0.9),
            other => panic!("expected sampling strategy, got {other:?}"),
        }
    }

    #[test]
    fn test_force_greedy() {
        let user = GenerationOverrides {
            do_sample: Some(false),
            ..Default::default()
        };
        let resolved = resolve_generation_config(
            GenerationConfig::default(),
            &user,
            &GenerationOverrides::default(),
        );
        assert!(resolved.is_greedy());
    }

    #[test]
    fn test_force_beam_search() {
        let user = GenerationOverrides {
            num_beams: Some(4),
            ..Default::default()
        };
        let resolved = resolve_generation_config(
            GenerationConfig::default(),
            &user,
            &GenerationOverrides::default(),
        );

        match &resolved.as_ref().strategy {
            DecodingStrategy::BeamSearch(p) => assert_eq!(p.num_beams, 4),
            other => panic!("expected beam search, got {other:?}"),
        }
    }

    #[test]
    fn test_num_beams_one_does_not_force_beams() {
        let user = GenerationOverrides {
            num_beams: Some(1),
            ..Default::default()
        };
        let resolved = resolve_generation_config(
            GenerationConfig::default(),
            &user,
            &GenerationOverrides::default(),
        );
        assert!(resolved.is_sampling());
    }

    #[test]
    fn test_seed_override() {
        let runtime = GenerationOverrides {
            seed: Some(42),
            ..Default::default()
        };
        let resolved = resolve_generation_config(
            GenerationConfig::default(),
            &GenerationOverrides::default(),
            &runtime,
        );
        assert_eq!(resolved.as_ref().seed, Some(42));
    }
}
