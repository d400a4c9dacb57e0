//! Bijoy — Victory Day (Bijoy Dibosh) poem and slogan generation.
//!
//! Generates short patriotic poems in English and Bengali from theme input,
//! using a pretrained decoder when one can be loaded and falling back to
//! template-based recombination of a small training corpus when it cannot
//! (or when the deployment is memory-constrained). Every request produces
//! well-formed four-line poems regardless of missing datasets or failed
//! model loads.
//!
//! # Example
//!
//! ```ignore
//! use bijoy::{Language, PoetryGenerator};
//!
//! let generator = PoetryGenerator::builder(Language::English)
//!     .data_dir("data")
//!     .template_only(true)
//!     .build();
//!
//! for poem in generator.generate("Freedom", 2) {
//!     println!("{poem}\n");
//! }
//! ```

pub mod backend;
pub mod config;
pub mod corpus;
pub mod generation;
pub mod generator;
pub mod normalize;
pub mod prompt;
pub mod registry;
pub mod themes;

// Re-export the main API surface.
pub use backend::{GenerationOutcome, ModelBackend, NullBackend, TemplateComposer, TextGenerator};
pub use config::{DataPaths, Language, ModelSpec, PoetryFormat};
pub use corpus::{PoemRecord, ThemeCatalog, TrainingCorpus};
pub use generation::{
    resolve_generation_config, DecodingStrategy, GenerationConfig, GenerationOverrides,
    ResolvedGenerationConfig,
};
pub use generator::{Poem, PoetryError, PoetryGenerator, PoetryGeneratorBuilder, PoetryResult};
pub use normalize::LineNormalizer;
pub use registry::GeneratorRegistry;
pub use themes::ThemeAliasTable;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
