//! Static configuration: languages, poem shape, dataset paths, model selection.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::generator::PoetryError;

/// Maximum number of prompt tokens handed to the model backend.
/// Longer prompts are truncated from the end.
pub const PROMPT_TOKEN_BUDGET: usize = 512;

/// Upper bound on poems per `generate` call. The caller-facing layer is
/// expected to validate counts; the facade clamps defensively.
pub const MAX_POEMS_PER_CALL: usize = 5;

/// Generation language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Bengali,
}

impl Language {
    /// Lowercase identifier used in datasets and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Bengali => "bengali",
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> [Language; 2] {
        [Language::English, Language::Bengali]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = PoetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "bengali" | "bangla" | "bn" => Ok(Language::Bengali),
            other => Err(PoetryError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// The poem shape enforced by the line normalizer.
#[derive(Debug, Clone, Copy)]
pub struct PoetryFormat {
    /// Number of lines every poem must have.
    pub lines: usize,
    /// Lines shorter than this are dropped as formatting artifacts.
    pub min_line_length: usize,
    /// Lines are truncated to this many characters.
    pub max_line_length: usize,
}

impl Default for PoetryFormat {
    fn default() -> Self {
        Self {
            lines: 4,
            min_line_length: 10,
            max_line_length: 80,
        }
    }
}

/// Where a language's pretrained decoder and tokenizer come from.
///
/// Weights are quantized GGUF files fetched through the Hugging Face hub
/// cache on first use.
#[derive(Debug, Clone)]
pub struct ModelSpec {
    /// Hub repository holding the GGUF weights.
    pub weights_repo: String,
    /// File name of the GGUF weights inside the repository.
    pub weights_file: String,
    /// Hub repository holding `tokenizer.json`.
    pub tokenizer_repo: String,
}

impl ModelSpec {
    /// Default model for a language.
    ///
    /// Both languages currently share a small multilingual chat model; the
    /// per-language indirection exists so a Bengali-specific model can be
    /// dropped in without touching the backend.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English | Language::Bengali => Self {
                weights_repo: "TheBloke/TinyLlama-1.1B-Chat-v1.0-GGUF".to_string(),
                weights_file: "tinyllama-1.1b-chat-v1.0.Q4_K_M.gguf".to_string(),
                tokenizer_repo: "TinyLlama/TinyLlama-1.1B-Chat-v1.0".to_string(),
            },
        }
    }
}

/// Filesystem locations of the two read-only JSON datasets.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub training_data: PathBuf,
    pub themes: PathBuf,
}

impl DataPaths {
    /// Dataset paths under a data directory.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            training_data: dir.join("training_data.json"),
            themes: dir.join("themes.json"),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new("data")
    }
}

/// Default cache directory for downloaded model files.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bijoy")
}
