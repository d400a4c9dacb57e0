//! Read-only datasets: training corpus and theme catalog.
//!
//! Both are loaded once at generator construction. A missing or malformed
//! file is logged and replaced with an empty dataset; generation degrades
//! through the template path instead of failing.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::warn;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::config::Language;

/// One poem from the training corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoemRecord {
    pub text: String,
    #[serde(default)]
    pub theme: String,
}

/// The two per-language poem collections plus the slogan list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingCorpus {
    #[serde(default)]
    pub bengali_poems: Vec<PoemRecord>,
    #[serde(default)]
    pub english_poems: Vec<PoemRecord>,
    #[serde(default)]
    pub slogans: Vec<String>,
}

impl TrainingCorpus {
    /// Load the corpus from a JSON file, substituting an empty corpus when
    /// the file is absent or unreadable.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(corpus) => corpus,
                Err(e) => {
                    warn!("malformed training data {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                warn!(
                    "training data not found at {}, using empty dataset: {e}",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Poems for one language.
    pub fn poems(&self, language: Language) -> &[PoemRecord] {
        match language {
            Language::Bengali => &self.bengali_poems,
            Language::English => &self.english_poems,
        }
    }

    /// Poems matching a canonical theme, or the whole language collection
    /// when nothing matches.
    pub fn poems_for_theme(&self, theme: &str, language: Language) -> Vec<&PoemRecord> {
        let pool = self.poems(language);
        let matching: Vec<&PoemRecord> = pool.iter().filter(|p| p.theme == theme).collect();
        if matching.is_empty() {
            pool.iter().collect()
        } else {
            matching
        }
    }

    /// Random sample of up to `k` example poem texts for few-shot prompting.
    ///
    /// Sampling is without replacement. An empty pool yields an empty vec;
    /// callers treat absent examples as a common, valid case.
    pub fn sample_examples(&self, theme: &str, language: Language, k: usize) -> Vec<String> {
        let pool = self.poems_for_theme(theme, language);
        let mut rng = rand::thread_rng();
        pool.choose_multiple(&mut rng, k.min(pool.len()))
            .map(|record| record.text.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ThemeInfo {
    #[serde(default)]
    prompts: Vec<String>,
}

/// Theme metadata: optional seed prompts per canonical theme.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeCatalog {
    #[serde(default)]
    themes: HashMap<String, ThemeInfo>,
}

impl ThemeCatalog {
    /// Load the catalog from a JSON file; absence is not an error.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(catalog) => catalog,
                Err(e) => {
                    warn!("malformed themes data {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                warn!(
                    "themes data not found at {}, using empty dataset: {e}",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// A randomly chosen seed prompt for the theme, if any are registered.
    pub fn seed_prompt(&self, theme: &str) -> Option<String> {
        let info = self.themes.get(theme)?;
        let mut rng = rand::thread_rng();
        info.prompts.choose(&mut rng).cloned()
    }

    /// Whether the catalog has an entry for the theme.
    pub fn contains(&self, theme: &str) -> bool {
        self.themes.contains_key(theme)
    }
}
