//! Facade types and error definitions.

use std::fmt;

use thiserror::Error;

/// Errors surfaced to the caller-facing layer.
///
/// Generation itself never fails; these cover request construction misuse
/// only.
#[derive(Debug, Error)]
pub enum PoetryError {
    /// Language string not recognized.
    #[error("unsupported language: '{0}' (expected 'english' or 'bengali')")]
    UnsupportedLanguage(String),

    /// Request rejected before reaching the core.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Result type for facade operations.
pub type PoetryResult<T> = Result<T, PoetryError>;

/// A finished poem: exactly four normalized lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poem {
    lines: Vec<String>,
}

impl Poem {
    pub(crate) fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// The poem's lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Poem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
