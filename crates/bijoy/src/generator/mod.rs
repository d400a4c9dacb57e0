//! Poetry generator facade.
//!
//! Orchestrates prompt construction, backend invocation with template
//! fallback, and line normalization, producing N independent poems per
//! request. Build one with [`PoetryGeneratorBuilder`].

mod builder;
mod model;
mod types;


pub use builder::PoetryGeneratorBuilder;
pub use model::PoetryGenerator;
pub use types::{Poem, PoetryError, PoetryResult};
