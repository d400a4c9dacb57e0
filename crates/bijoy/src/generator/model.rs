//! Core `PoetryGenerator` implementation.

use std::sync::Arc;

use log::{info, warn};
use rand::seq::SliceRandom;

use crate::backend::{
    GenerationOutcome, ModelBackend, NullBackend, TemplateComposer, TextGenerator,
};
use crate::config::{default_cache_dir, Language, ModelSpec, MAX_POEMS_PER_CALL};
use crate::corpus::{ThemeCatalog, TrainingCorpus};
use crate::generation::{
    resolve_generation_config, GenerationConfig, GenerationOverrides, ResolvedGenerationConfig,
};
use crate::normalize::LineNormalizer;
use crate::prompt::build_prompt;
use crate::themes::ThemeAliasTable;

use super::builder::PoetryGeneratorBuilder;
use super::types::Poem;

/// Slogan returned when the dataset has none.
const DEFAULT_SLOGAN: &str = "জয় বাংলা! 🇧🇩";

/// Victory Day poem and slogan generator for one language.
///
/// Holds the read-only datasets, the generation backend selected at
/// construction, and the template fallback. `generate` always succeeds:
/// every failure mode inside degrades to template composition and the
/// normalizer guarantees the four-line shape.
pub struct PoetryGenerator {
    language: Language,
    aliases: Arc<ThemeAliasTable>,
    catalog: ThemeCatalog,
    corpus: Arc<TrainingCorpus>,
    backend: Box<dyn TextGenerator>,
    composer: TemplateComposer,
    normalizer: LineNormalizer,
    generation_config: ResolvedGenerationConfig,
}

impl PoetryGenerator {
    /// Creates a generator with default settings.
    pub fn new(language: Language) -> Self {
        PoetryGeneratorBuilder::new(language).build()
    }

    /// Creates a builder for custom configuration.
    pub fn builder(language: Language) -> PoetryGeneratorBuilder {
        PoetryGeneratorBuilder::new(language)
    }

    pub(crate) fn from_builder(builder: PoetryGeneratorBuilder) -> Self {
        let paths = builder.data_paths();

        let corpus = Arc::new(
            builder
                .corpus
                .unwrap_or_else(|| TrainingCorpus::load(&paths.training_data)),
        );
        let catalog = builder
            .catalog
            .unwrap_or_else(|| ThemeCatalog::load(&paths.themes));
        let aliases = Arc::new(ThemeAliasTable::default());

        let generation_config = resolve_generation_config(
            GenerationConfig::default(),
            &builder.generation_overrides,
            &GenerationOverrides::default(),
        );

        // Backend capability is chosen exactly once, here. Memory-constrained
        // mode wins over everything: no model-loading path may exist at all.
        let backend: Box<dyn TextGenerator> = if builder.template_only {
            info!("template-only mode, model generation disabled");
            Box::new(NullBackend::new("memory-constrained mode"))
        } else if let Some(backend) = builder.backend {
            backend
        } else {
            Box::new(ModelBackend::new(
                ModelSpec::for_language(builder.language),
                generation_config.clone(),
                builder.cache_dir.unwrap_or_else(default_cache_dir),
            ))
        };

        let composer = TemplateComposer::new(corpus.clone(), aliases.clone());

        Self {
            language: builder.language,
            aliases,
            catalog,
            corpus,
            backend,
            composer,
            normalizer: LineNormalizer::new(builder.format),
            generation_config,
        }
    }

    /// Generate `count` independent poems for a theme.
    ///
    /// Iterations share no state: duplicate poems across a call are possible
    /// and acceptable. Count is clamped to `1..=5` defensively; the
    /// caller-facing layer is expected to validate it properly.
    pub fn generate(&self, theme: &str, count: usize) -> Vec<Poem> {
        let requested = count.clamp(1, MAX_POEMS_PER_CALL);
        if requested != count {
            warn!("poem count {count} out of range, clamped to {requested}");
        }

        info!(
            "generating {requested} poem(s) for theme '{theme}' ({})",
            self.language
        );

        (0..requested).map(|_| self.generate_one(theme)).collect()
    }

    fn generate_one(&self, theme: &str) -> Poem {
        let prompt = build_prompt(
            &self.aliases,
            &self.catalog,
            &self.corpus,
            theme,
            self.language,
        );

        let raw = match self.backend.produce(&prompt) {
            GenerationOutcome::Success(text) => text,
            GenerationOutcome::Unavailable => self.composer.compose(theme, self.language),
            GenerationOutcome::TransientFailure(e) => {
                warn!(
                    "{} backend failed ({e:#}), using template generation",
                    self.backend.describe()
                );
                self.composer.compose(theme, self.language)
            }
        };

        Poem::new(self.normalizer.normalize(&raw, self.language))
    }

    /// Canonical theme keys, in stable table order.
    pub fn available_themes(&self) -> Vec<String> {
        self.aliases.canonical_keys()
    }

    /// A uniformly random slogan, or a fixed default when the dataset has
    /// none.
    pub fn random_slogan(&self) -> String {
        let mut rng = rand::thread_rng();
        self.corpus
            .slogans
            .choose(&mut rng)
            .cloned()
            .unwrap_or_else(|| DEFAULT_SLOGAN.to_string())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn generation_config(&self) -> &ResolvedGenerationConfig {
        &self.generation_config
    }
}
