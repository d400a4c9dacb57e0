//! Template-based fallback generation.
//!
//! Recombines poems from the training corpus instead of invoking a model:
//! pick a random theme-matching poem, keep its first four lines, pad with
//! fixed filler lines when it is short. With an empty corpus a hard-coded
//! default poem embedding the raw theme is emitted. This path always
//! produces text.

use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::config::Language;
use crate::corpus::TrainingCorpus;
use crate::themes::ThemeAliasTable;

/// Lines every poem is padded to.
const POEM_LINES: usize = 4;

/// Fixed filler lines used to pad short poems. Theme-templated for English;
/// the Bengali set is static.
pub fn filler_lines(theme: &str, language: Language, count: usize) -> Vec<String> {
    let templates: Vec<String> = match language {
        Language::English => vec![
            format!("The spirit of {theme} lives forever strong"),
            format!("Through {theme} we find our way"),
            format!("In hearts of heroes, {theme} stays"),
            "Victory's song will always play".to_string(),
        ],
        Language::Bengali => vec![
            "বাংলার আকাশে উড়ে স্বাধীনতার পতাকা".to_string(),
            "বিজয়ের গান গাই আমরা".to_string(),
            "শহীদদের স্মৃতি অমর".to_string(),
            "জয় বাংলা জয় বাংলাদেশ".to_string(),
        ],
    };

    let mut rng = rand::thread_rng();
    templates
        .choose_multiple(&mut rng, count.min(templates.len()))
        .cloned()
        .collect()
}

/// Hard-coded default poem for when no corpus data exists at all.
pub fn default_poem(theme: &str, language: Language) -> String {
    match language {
        Language::Bengali => format!(
            "বিজয় দিবসের শুভেচ্ছা\n{theme} এর মহিমায় ভরা\nস্বাধীনতার সূর্য উঠেছে\nবাংলাদেশ আমার প্রিয় দেশ"
        ),
        Language::English => format!(
            "On Victory Day we celebrate\nThe {theme} of our nation great\nDecember's triumph we relate\nFreedom's story, never late"
        ),
    }
}

/// Deterministic-but-randomized corpus recombination.
pub struct TemplateComposer {
    corpus: Arc<TrainingCorpus>,
    aliases: Arc<ThemeAliasTable>,
}

impl TemplateComposer {
    pub fn new(corpus: Arc<TrainingCorpus>, aliases: Arc<ThemeAliasTable>) -> Self {
        Self { corpus, aliases }
    }

    /// Compose a poem for a theme.
    ///
    /// Resolves the theme, draws a random matching poem (or any poem when
    /// nothing matches), keeps its first four lines, and pads with filler
    /// lines. Cannot fail.
    pub fn compose(&self, theme: &str, language: Language) -> String {
        let canonical = self.aliases.resolve(theme);

        let pool = self.corpus.poems_for_theme(&canonical, language);
        if pool.is_empty() {
            return default_poem(theme, language);
        }

        let mut rng = rand::thread_rng();
        // Non-empty pool, so choose cannot return None.
        let base = match pool.choose(&mut rng) {
            Some(record) => record,
            None => return default_poem(theme, language),
        };

        let mut lines: Vec<String> = base
            .text
            .trim()
            .split('\n')
            .map(|line| line.to_string())
            .collect();

        if lines.len() >= POEM_LINES {
            lines.truncate(POEM_LINES);
        } else {
            let missing = POEM_LINES - lines.len();
            lines.extend(filler_lines(&canonical, language, missing));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::PoemRecord;

    fn composer(corpus: TrainingCorpus) -> TemplateComposer {
        TemplateComposer::new(Arc::new(corpus), Arc::new(ThemeAliasTable::default()))
    }

    #[test]
    fn test_empty_corpus_emits_default_poem() {
        let composer = composer(TrainingCorpus::default());
        let poem = composer.compose("Freedom", Language::English);

        assert_eq!(poem.lines().count(), 4);
        assert!(poem.contains("Freedom"));
    }

    #[test]
    fn test_empty_corpus_bengali_default() {
        let composer = composer(TrainingCorpus::default());
        let poem = composer.compose("বিজয়", Language::Bengali);

        assert_eq!(poem.lines().count(), 4);
        assert!(poem.contains("বিজয়"));
    }

    #[test]
    fn test_long_poem_truncated_to_four_lines() {
        let corpus = TrainingCorpus {
            english_poems: vec![PoemRecord {
                text: "one\ntwo\nthree\nfour\nfive\nsix".to_string(),
                theme: "victory".to_string(),
            }],
            ..Default::default()
        };
        let composer = composer(corpus);

        let poem = composer.compose("victory", Language::English);
        assert_eq!(poem, "one\ntwo\nthree\nfour");
    }

    #[test]
    fn test_short_poem_padded_with_fillers() {
        let corpus = TrainingCorpus {
            english_poems: vec![PoemRecord {
                text: "a lone opening line".to_string(),
                theme: "victory".to_string(),
            }],
            ..Default::default()
        };
        let composer = composer(corpus);

        let poem = composer.compose("victory", Language::English);
        let lines: Vec<&str> = poem.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "a lone opening line");
    }

    #[test]
    fn test_alias_input_reaches_matching_poems() {
        let corpus = TrainingCorpus {
            english_poems: vec![
                PoemRecord {
                    text: "victory poem\nline\nline\nline".to_string(),
                    theme: "victory".to_string(),
                },
                PoemRecord {
                    text: "freedom poem\nline\nline\nline".to_string(),
                    theme: "freedom".to_string(),
                },
            ],
            ..Default::default()
        };
        let composer = composer(corpus);

        // "triumph" is an alias of victory; only the victory poem matches.
        let poem = composer.compose("Triumph", Language::English);
        assert!(poem.starts_with("victory poem"));
    }

    #[test]
    fn test_filler_lines_meet_minimum_length() {
        for language in Language::all() {
            for line in filler_lines("victory", language, 4) {
                assert!(
                    line.chars().count() >= 10,
                    "filler line too short: {line:?}"
                );
            }
        }
    }

    #[test]
    fn test_filler_lines_count_bounded() {
        assert_eq!(filler_lines("unity", Language::English, 2).len(), 2);
        assert_eq!(filler_lines("unity", Language::English, 10).len(), 4);
    }
}
