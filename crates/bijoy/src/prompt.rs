//! Prompt construction for the model backend.
//!
//! Combines a theme seed prompt with up to two retrieved example poems into
//! a few-shot prompt, or falls back to a fixed per-language prefix when the
//! corpus has nothing to offer. Pure string assembly; cannot fail.

use crate::config::Language;
use crate::corpus::{ThemeCatalog, TrainingCorpus};
use crate::themes::ThemeAliasTable;

/// How many example poems to retrieve for few-shot framing.
const NUM_EXAMPLES: usize = 2;

fn prefix_template(language: Language) -> &'static str {
    match language {
        Language::Bengali => "বিজয় দিবসের উপর একটি {theme} সম্পর্কিত কবিতা:\n",
        Language::English => "A patriotic Victory Day poem about {theme}:\n",
    }
}

/// Generic seed used when the catalog has no prompts for a theme.
fn generic_seed(theme: &str) -> String {
    format!("A Victory Day poem about {theme}")
}

/// Build the generation prompt for a theme.
///
/// With examples: `"{example}\n\n{example}\n\n{seed}:\n"`.
/// Without: `"{prefix with theme}{seed}\n"`.
pub fn build_prompt(
    aliases: &ThemeAliasTable,
    catalog: &ThemeCatalog,
    corpus: &TrainingCorpus,
    theme: &str,
    language: Language,
) -> String {
    let canonical = aliases.resolve(theme);

    let seed = catalog
        .seed_prompt(&canonical)
        .unwrap_or_else(|| generic_seed(theme));

    let examples = corpus.sample_examples(&canonical, language, NUM_EXAMPLES);
    if !examples.is_empty() {
        return format!("{}\n\n{}:\n", examples.join("\n\n"), seed);
    }

    let prefix = prefix_template(language).replace("{theme}", theme);
    format!("{prefix}{seed}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::PoemRecord;

    fn empty_catalog() -> ThemeCatalog {
        ThemeCatalog::default()
    }

    #[test]
    fn test_prompt_without_examples_uses_prefix() {
        let aliases = ThemeAliasTable::default();
        let corpus = TrainingCorpus::default();

        let prompt = build_prompt(
            &aliases,
            &empty_catalog(),
            &corpus,
            "Freedom",
            Language::English,
        );

        assert!(prompt.starts_with("A patriotic Victory Day poem about Freedom:\n"));
        assert!(prompt.contains("A Victory Day poem about Freedom"));
        assert!(prompt.ends_with('\n'));
    }

    #[test]
    fn test_prompt_with_examples_is_few_shot() {
        let aliases = ThemeAliasTable::default();
        let corpus = TrainingCorpus {
            english_poems: vec![PoemRecord {
                text: "An example poem\nwith several lines".to_string(),
                theme: "freedom".to_string(),
            }],
            ..Default::default()
        };

        let prompt = build_prompt(
            &aliases,
            &empty_catalog(),
            &corpus,
            "liberty",
            Language::English,
        );

        assert!(prompt.starts_with("An example poem\nwith several lines\n\n"));
        assert!(prompt.ends_with(":\n"));
        // The fixed prefix path must not be used when examples exist.
        assert!(!prompt.contains("A patriotic Victory Day poem about"));
    }

    #[test]
    fn test_prompt_bengali_prefix() {
        let aliases = ThemeAliasTable::default();
        let corpus = TrainingCorpus::default();

        let prompt = build_prompt(
            &aliases,
            &empty_catalog(),
            &corpus,
            "বিজয়",
            Language::Bengali,
        );

        assert!(prompt.contains("বিজয় দিবসের"));
        assert!(prompt.contains("বিজয়"));
    }

    #[test]
    fn test_prompt_unknown_theme_does_not_fail() {
        let aliases = ThemeAliasTable::default();
        let corpus = TrainingCorpus::default();

        let prompt = build_prompt(
            &aliases,
            &empty_catalog(),
            &corpus,
            "Monsoon",
            Language::English,
        );
        assert!(prompt.contains("Monsoon"));
    }
}
