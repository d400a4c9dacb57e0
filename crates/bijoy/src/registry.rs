//! Per-language generator registry.
//!
//! One `PoetryGenerator` per language, constructed on first demand and held
//! for the registry's lifetime. Owned by the serving layer and passed to
//! request handlers explicitly; there is no ambient global state.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::Language;
use crate::generator::PoetryGenerator;

/// Lazily-populated map from language to a shared generator instance.
pub struct GeneratorRegistry {
    data_dir: Option<PathBuf>,
    template_only: bool,
    generators: Mutex<HashMap<Language, Arc<PoetryGenerator>>>,
}

impl GeneratorRegistry {
    pub fn new(data_dir: Option<PathBuf>, template_only: bool) -> Self {
        Self {
            data_dir,
            template_only,
            generators: Mutex::new(HashMap::new()),
        }
    }

    /// The generator for a language, constructing it on first use.
    pub fn get_or_init(&self, language: Language) -> Arc<PoetryGenerator> {
        let mut generators = match self.generators.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        generators
            .entry(language)
            .or_insert_with(|| {
                let mut builder =
                    PoetryGenerator::builder(language).template_only(self.template_only);
                if let Some(dir) = &self.data_dir {
                    builder = builder.data_dir(dir);
                }
                Arc::new(builder.build())
            })
            .clone()
    }

    /// Languages with an already-constructed generator.
    pub fn initialized_languages(&self) -> Vec<Language> {
        let generators = match self.generators.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut languages: Vec<Language> = generators.keys().copied().collect();
        languages.sort_by_key(|l| l.as_str());
        languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> GeneratorRegistry {
        // Template-only with a nonexistent data dir: no files, no models.
        GeneratorRegistry::new(Some(PathBuf::from("/nonexistent/bijoy-data")), true)
    }

    #[test]
    fn test_same_instance_returned_per_language() {
        let registry = registry();
        let a = registry.get_or_init(Language::English);
        let b = registry.get_or_init(Language::English);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_distinct_instances_per_language() {
        let registry = registry();
        let english = registry.get_or_init(Language::English);
        let bengali = registry.get_or_init(Language::Bengali);
        assert!(!Arc::ptr_eq(&english, &bengali));
        assert_eq!(english.language(), Language::English);
        assert_eq!(bengali.language(), Language::Bengali);
    }

    #[test]
    fn test_initialized_languages_tracks_construction() {
        let registry = registry();
        assert!(registry.initialized_languages().is_empty());

        registry.get_or_init(Language::Bengali);
        assert_eq!(registry.initialized_languages(), vec![Language::Bengali]);
    }

    #[test]
    fn test_registry_generators_work() {
        let registry = registry();
        let generator = registry.get_or_init(Language::English);
        let poems = generator.generate("Freedom", 1);
        assert_eq!(poems.len(), 1);
        assert_eq!(poems[0].lines().len(), 4);
    }
}
