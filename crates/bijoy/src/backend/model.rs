//! Model-backed generation over a quantized GGUF decoder.
//!
//! The model handle is loaded lazily on first use and at most once per
//! backend instance. A load failure marks the backend permanently
//! unavailable; a failure during tokenization or decoding is reported as a
//! transient, per-call failure so one bad generation does not disable the
//! model for the rest of the session.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use candle_core::quantized::gguf_file;
use candle_core::{Device, Tensor};
use candle_transformers::generation::{LogitsProcessor, Sampling};
use candle_transformers::models::quantized_llama::ModelWeights;
use log::{debug, error, info};
use rand::Rng;
use tokenizers::Tokenizer;

use crate::config::{ModelSpec, PROMPT_TOKEN_BUDGET};
use crate::generation::{DecodingStrategy, ResolvedGenerationConfig};

use super::{GenerationOutcome, TextGenerator};

/// Window of recent tokens the repetition penalty is applied over.
const REPEAT_LAST_N: usize = 64;

/// Token strings probed for an end-of-sequence id, in preference order.
const EOS_CANDIDATES: &[&str] = &["</s>", "<|endoftext|>", "<|eot_id|>", "<|im_end|>"];

enum ModelSlot {
    Unloaded,
    Unavailable,
    Ready(Box<LoadedModel>),
}

struct LoadedModel {
    weights: ModelWeights,
    tokenizer: Tokenizer,
    eos_tokens: Vec<u32>,
    device: Device,
}

/// Lazily loaded GGUF decoder behind the `TextGenerator` capability.
pub struct ModelBackend {
    spec: ModelSpec,
    config: ResolvedGenerationConfig,
    cache_dir: PathBuf,
    slot: Mutex<ModelSlot>,
}

impl ModelBackend {
    pub fn new(spec: ModelSpec, config: ResolvedGenerationConfig, cache_dir: PathBuf) -> Self {
        Self {
            spec,
            config,
            cache_dir,
            slot: Mutex::new(ModelSlot::Unloaded),
        }
    }

    fn load(&self) -> Result<LoadedModel> {
        let api = hf_hub::api::sync::ApiBuilder::new()
            .with_cache_dir(self.cache_dir.clone())
            .build()
            .context("hub api init failed")?;

        let tokenizer_path = api
            .model(self.spec.tokenizer_repo.clone())
            .get("tokenizer.json")
            .with_context(|| format!("fetching tokenizer for {}", self.spec.tokenizer_repo))?;
        let weights_path = api
            .model(self.spec.weights_repo.clone())
            .get(&self.spec.weights_file)
            .with_context(|| format!("fetching weights {}", self.spec.weights_file))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path).map_err(anyhow::Error::msg)?;

        let device = Device::Cpu;
        let mut file = File::open(&weights_path)
            .with_context(|| format!("opening {}", weights_path.display()))?;
        let content = gguf_file::Content::read(&mut file)
            .map_err(|e| e.with_path(&weights_path))
            .context("reading gguf metadata")?;
        let weights = ModelWeights::from_gguf(content, &mut file, &device)
            .context("building model from gguf")?;

        let eos_tokens = EOS_CANDIDATES
            .iter()
            .filter_map(|tok| tokenizer.token_to_id(tok))
            .collect();

        Ok(LoadedModel {
            weights,
            tokenizer,
            eos_tokens,
            device,
        })
    }

    fn sampling(&self) -> Sampling {
        match &self.config.as_ref().strategy {
            DecodingStrategy::Greedy => Sampling::ArgMax,
            DecodingStrategy::BeamSearch(params) => {
                // No beam decoder on this backend; beam configs decode
                // greedily.
                debug!(
                    "beam search (num_beams={}) not supported, decoding greedily",
                    params.num_beams
                );
                Sampling::ArgMax
            }
            DecodingStrategy::Sample(params) => {
                if params.temperature <= 0.0 {
                    return Sampling::ArgMax;
                }
                let temperature = f64::from(params.temperature);
                match (params.top_k, params.top_p) {
                    (Some(k), Some(p)) => Sampling::TopKThenTopP {
                        k,
                        p: f64::from(p),
                        temperature,
                    },
                    (Some(k), None) => Sampling::TopK { k, temperature },
                    (None, Some(p)) => Sampling::TopP {
                        p: f64::from(p),
                        temperature,
                    },
                    (None, None) => Sampling::All { temperature },
                }
            }
        }
    }

    fn run(&self, loaded: &mut LoadedModel, prompt: &str) -> Result<String> {
        let config = self.config.as_ref();

        let encoding = loaded
            .tokenizer
            .encode(prompt, true)
            .map_err(anyhow::Error::msg)?;
        let mut prompt_ids = encoding.get_ids().to_vec();
        prompt_ids.truncate(PROMPT_TOKEN_BUDGET);
        if prompt_ids.is_empty() {
            anyhow::bail!("prompt tokenized to zero tokens");
        }

        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut logits_processor = LogitsProcessor::from_sampling(seed, self.sampling());

        // Prompt fill pass.
        let input = Tensor::new(prompt_ids.as_slice(), &loaded.device)?.unsqueeze(0)?;
        let logits = loaded.weights.forward(&input, 0)?.squeeze(0)?;
        let mut next = logits_processor.sample(&logits)?;

        let max_new_tokens = config.max_new_tokens.unwrap_or(100);
        let mut all_tokens = prompt_ids.clone();
        all_tokens.push(next);
        let mut generated = vec![next];

        for index in 1..max_new_tokens {
            if loaded.eos_tokens.contains(&next) {
                break;
            }

            let input = Tensor::new(&[next], &loaded.device)?.unsqueeze(0)?;
            let logits = loaded
                .weights
                .forward(&input, prompt_ids.len() + index - 1)?
                .squeeze(0)?;

            let logits = if config.repetition_penalty <= 1.0 {
                logits
            } else {
                let start = all_tokens.len().saturating_sub(REPEAT_LAST_N);
                candle_transformers::utils::apply_repeat_penalty(
                    &logits,
                    config.repetition_penalty,
                    &all_tokens[start..],
                )?
            };

            next = logits_processor.sample(&logits)?;
            all_tokens.push(next);
            generated.push(next);
        }

        if let Some(&last) = generated.last() {
            if loaded.eos_tokens.contains(&last) {
                generated.pop();
            }
        }

        let text = loaded
            .tokenizer
            .decode(&generated, true)
            .map_err(anyhow::Error::msg)?;

        // Some tokenizers re-emit the prompt in the decoded stream.
        let text = match text.strip_prefix(prompt) {
            Some(rest) => rest.trim_start().to_string(),
            None => text,
        };

        Ok(text)
    }
}

impl TextGenerator for ModelBackend {
    fn produce(&self, prompt: &str) -> GenerationOutcome {
        let mut slot = match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if matches!(*slot, ModelSlot::Unloaded) {
            match self.load() {
                Ok(loaded) => {
                    info!(
                        "loaded model {} ({})",
                        self.spec.weights_repo, self.spec.weights_file
                    );
                    *slot = ModelSlot::Ready(Box::new(loaded));
                }
                Err(e) => {
                    error!(
                        "failed to load model {}: {e:#}; model generation disabled",
                        self.spec.weights_repo
                    );
                    *slot = ModelSlot::Unavailable;
                }
            }
        }

        match &mut *slot {
            ModelSlot::Ready(loaded) => match self.run(loaded, prompt) {
                Ok(text) => GenerationOutcome::Success(text),
                Err(e) => {
                    error!("generation failed: {e:#}");
                    GenerationOutcome::TransientFailure(e)
                }
            },
            ModelSlot::Unloaded | ModelSlot::Unavailable => GenerationOutcome::Unavailable,
        }
    }

    fn describe(&self) -> &str {
        "model"
    }
}
