//! Builder for configuring a `PoetryGenerator`.

use std::path::PathBuf;

use crate::backend::TextGenerator;
use crate::config::{DataPaths, Language, PoetryFormat};
use crate::corpus::{ThemeCatalog, TrainingCorpus};
use crate::generation::GenerationOverrides;

use super::model::PoetryGenerator;

/// Builder for a [`PoetryGenerator`].
///
/// # Example
///
/// ```ignore
/// let generator = PoetryGenerator::builder(Language::English)
///     .data_dir("data")
///     .temperature(0.9)
///     .build();
/// ```
pub struct PoetryGeneratorBuilder {
    pub(crate) language: Language,

    // Datasets
    pub(crate) data_dir: Option<PathBuf>,
    pub(crate) corpus: Option<TrainingCorpus>,
    pub(crate) catalog: Option<ThemeCatalog>,

    // Backend selection
    pub(crate) template_only: bool,
    pub(crate) backend: Option<Box<dyn TextGenerator>>,
    pub(crate) cache_dir: Option<PathBuf>,

    // Generation defaults
    pub(crate) generation_overrides: GenerationOverrides,

    // Output shape
    pub(crate) format: PoetryFormat,
}

impl PoetryGeneratorBuilder {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            data_dir: None,
            corpus: None,
            catalog: None,
            template_only: false,
            backend: None,
            cache_dir: None,
            generation_overrides: GenerationOverrides::default(),
            format: PoetryFormat::default(),
        }
    }

    // =========================================================================
    // Datasets
    // =========================================================================

    /// Directory holding `training_data.json` and `themes.json`.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Use an already-loaded training corpus instead of reading from disk.
    pub fn corpus(mut self, corpus: TrainingCorpus) -> Self {
        self.corpus = Some(corpus);
        self
    }

    /// Use an already-loaded theme catalog instead of reading from disk.
    pub fn catalog(mut self, catalog: ThemeCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    // =========================================================================
    // Backend selection
    // =========================================================================

    /// Memory-constrained mode: never attempt to load a model; all
    /// generation goes through the template path. Takes precedence over an
    /// injected backend.
    pub fn template_only(mut self, yes: bool) -> Self {
        self.template_only = yes;
        self
    }

    /// Inject a custom backend (tests, alternative capabilities).
    pub fn backend(mut self, backend: Box<dyn TextGenerator>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Cache directory for downloaded model files.
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    // =========================================================================
    // Generation parameters
    // =========================================================================

    /// Sampling temperature. Higher is more random.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.generation_overrides.temperature = Some(temperature);
        self
    }

    /// Maximum number of new tokens per generation.
    pub fn max_tokens(mut self, max: usize) -> Self {
        self.generation_overrides.max_new_tokens = Some(max);
        self
    }

    /// Top-K sampling limit.
    pub fn top_k(mut self, k: usize) -> Self {
        self.generation_overrides.top_k = Some(k);
        self
    }

    /// Top-P (nucleus) sampling threshold.
    pub fn top_p(mut self, p: f32) -> Self {
        self.generation_overrides.top_p = Some(p);
        self
    }

    /// Repetition penalty; values > 1.0 discourage repetition.
    pub fn repetition_penalty(mut self, penalty: f32) -> Self {
        self.generation_overrides.repetition_penalty = Some(penalty);
        self
    }

    /// RNG seed for reproducible model sampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.generation_overrides.seed = Some(seed);
        self
    }

    /// Set all generation overrides at once.
    pub fn generation_config(mut self, overrides: GenerationOverrides) -> Self {
        self.generation_overrides = overrides;
        self
    }

    // =========================================================================
    // Output shape
    // =========================================================================

    /// Override the poem format (line count and length bounds).
    pub fn format(mut self, format: PoetryFormat) -> Self {
        self.format = format;
        self
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Build the generator. Missing datasets degrade to empty ones; this
    /// never fails.
    pub fn build(self) -> PoetryGenerator {
        PoetryGenerator::from_builder(self)
    }

    pub(crate) fn data_paths(&self) -> DataPaths {
        match &self.data_dir {
            Some(dir) => DataPaths::new(dir),
            None => DataPaths::default(),
        }
    }
}
