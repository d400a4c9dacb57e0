//! Line normalization: the shape-enforcing boundary between unpredictable
//! generation output and the four-line poem contract.

use crate::backend::template::filler_lines;
use crate::config::{Language, PoetryFormat};

/// Theme used for filler lines when the originating theme is not threaded
/// through to the normalizer.
const FILLER_THEME: &str = "victory";

/// Forces arbitrary text into exactly `format.lines` lines.
#[derive(Debug, Clone, Copy)]
pub struct LineNormalizer {
    format: PoetryFormat,
}

impl LineNormalizer {
    pub fn new(format: PoetryFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> PoetryFormat {
        self.format
    }

    /// Normalize raw text into exactly `format.lines` lines.
    ///
    /// Splits on line breaks, trims, drops lines under the minimum length
    /// (formatting artifacts, not content), truncates survivors to the
    /// maximum, keeps the first four, and pads with filler lines. Always
    /// returns exactly the configured number of lines.
    pub fn normalize(&self, raw: &str, language: Language) -> Vec<String> {
        let mut lines: Vec<String> = Vec::with_capacity(self.format.lines);

        for line in raw.lines() {
            if lines.len() >= self.format.lines {
                break;
            }
            let trimmed = line.trim();
            if trimmed.chars().count() < self.format.min_line_length {
                continue;
            }
            lines.push(truncate_chars(trimmed, self.format.max_line_length));
        }

        while lines.len() < self.format.lines {
            let missing = self.format.lines - lines.len();
            let fillers = filler_lines(FILLER_THEME, language, missing);
            if fillers.is_empty() {
                break;
            }
            lines.extend(fillers);
        }

        lines.truncate(self.format.lines);
        lines
    }
}

impl Default for LineNormalizer {
    fn default() -> Self {
        Self::new(PoetryFormat::default())
    }
}

/// Truncate to at most `max` characters, on a char boundary.
fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> LineNormalizer {
        LineNormalizer::default()
    }

    #[test]
    fn test_four_good_lines_pass_through() {
        let raw = "a first good line\na second good line\na third good line\na fourth good line";
        let lines = normalizer().normalize(raw, Language::English);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "a first good line");
        assert_eq!(lines[3], "a fourth good line");
    }

    #[test]
    fn test_extra_lines_dropped() {
        let raw = "line number one ok\nline number two ok\nline number three ok\nline number four ok\nline number five ok";
        let lines = normalizer().normalize(raw, Language::English);
        assert_eq!(lines.len(), 4);
        assert!(!lines.contains(&"line number five ok".to_string()));
    }

    #[test]
    fn test_short_lines_are_artifacts() {
        // "ok" and "---" are under the 10-char minimum and must not survive.
        let raw = "ok\na proper poetry line here\n---\nanother proper line here";
        let lines = normalizer().normalize(raw, Language::English);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "a proper poetry line here");
        assert_eq!(lines[1], "another proper line here");
    }

    #[test]
    fn test_padding_to_four_lines() {
        let lines = normalizer().normalize("just one single line here", Language::English);
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert!(line.chars().count() >= 10);
        }
    }

    #[test]
    fn test_empty_input_is_all_filler() {
        let lines = normalizer().normalize("", Language::English);
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert!(!line.is_empty());
        }
    }

    #[test]
    fn test_bengali_filler_for_bengali_input() {
        let lines = normalizer().normalize("", Language::Bengali);
        assert_eq!(lines.len(), 4);
        // All fillers come from the fixed Bengali set.
        assert!(lines.iter().any(|l| l.contains("বাংলা")));
    }

    #[test]
    fn test_long_lines_truncated_to_maximum() {
        let long = "x".repeat(200);
        let raw = format!("{long}\n{long}\n{long}\n{long}");
        let lines = normalizer().normalize(&raw, Language::English);
        for line in &lines {
            assert_eq!(line.chars().count(), 80);
        }
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // Bengali codepoints are multi-byte; slicing must count chars.
        let line = "স্বাধীনতা ".repeat(20);
        let lines = normalizer().normalize(&line, Language::Bengali);
        assert!(lines[0].chars().count() <= 80);
    }

    #[test]
    fn test_custom_format() {
        let normalizer = LineNormalizer::new(PoetryFormat {
            lines: 4,
            min_line_length: 1,
            max_line_length: 5,
        });
        let lines = normalizer.normalize("abcdefghij\nxy", Language::English);
        assert_eq!(lines[0], "abcde");
        assert_eq!(lines[1], "xy");
    }
}
