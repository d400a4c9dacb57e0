//! Theme alias table and resolver.
//!
//! User input like "liberty", "শহীদ" or "Triumph" is mapped to one of the
//! canonical theme keys the datasets are indexed under. Unknown themes are
//! passed through lowercased rather than rejected; downstream stages degrade
//! to generic prompts and content.

/// Ordered mapping from canonical theme key to alias strings.
///
/// Order matters twice: `canonical_keys` must be stable across calls, and an
/// alias that appears under more than one theme resolves to the first owner
/// in table order.
#[derive(Debug, Clone)]
pub struct ThemeAliasTable {
    entries: Vec<(String, Vec<String>)>,
}

impl Default for ThemeAliasTable {
    fn default() -> Self {
        let table: &[(&str, &[&str])] = &[
            (
                "freedom",
                &["freedom", "liberty", "independence", "মুক্তি", "স্বাধীনতা"],
            ),
            ("sacrifice", &["sacrifice", "martyrs", "ত্যাগ", "শহীদ"]),
            ("victory", &["victory", "triumph", "win", "বিজয়", "জয়"]),
            (
                "heroes",
                &["heroes", "fighters", "warriors", "বীর", "মুক্তিযোদ্ধা"],
            ),
            (
                "future",
                &["future", "tomorrow", "next generation", "ভবিষ্যৎ", "প্রজন্ম"],
            ),
            (
                "independence",
                &["independence", "liberation", "স্বাধীনতা", "মুক্তিযুদ্ধ"],
            ),
            ("unity", &["unity", "together", "solidarity", "ঐক্য", "একতা"]),
            ("courage", &["courage", "bravery", "valor", "সাহস", "বীরত্ব"]),
        ];

        Self::from_entries(table.iter().map(|(key, aliases)| {
            (
                key.to_string(),
                aliases.iter().map(|a| a.to_string()).collect(),
            )
        }))
    }
}

impl ThemeAliasTable {
    /// Build a table from (canonical key, aliases) entries, preserving order.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Resolve free-text input to a canonical theme key.
    ///
    /// Lowercases and trims, then checks canonical keys, then scans alias
    /// lists case-insensitively. Input that matches nothing is returned
    /// lowercased; resolution cannot fail.
    pub fn resolve(&self, raw: &str) -> String {
        let needle = raw.trim().to_lowercase();

        if self.entries.iter().any(|(key, _)| *key == needle) {
            return needle;
        }

        for (key, aliases) in &self.entries {
            if aliases.iter().any(|alias| alias.to_lowercase() == needle) {
                return key.clone();
            }
        }

        needle
    }

    /// Canonical theme keys in table order. Stable across calls.
    pub fn canonical_keys(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Aliases registered for a canonical key.
    pub fn aliases(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, aliases)| aliases.as_slice())
    }

    /// Whether the key is a canonical theme.
    pub fn is_canonical(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }
}
