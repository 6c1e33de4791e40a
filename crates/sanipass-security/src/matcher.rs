use sanipass_core::{MatchResult, OcrBlock, SensitiveData};
use serde::{Deserialize, Serialize};

use crate::distance::levenshtein;

/// Matches recorded for one sensitive block, for reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub text: String,
    pub left: u32,
    pub top: u32,
    pub matches: Vec<String>,
}

impl From<&OcrBlock> for MatchSummary {
    fn from(block: &OcrBlock) -> Self {
        Self {
            text: block.text.clone(),
            left: block.left,
            top: block.top,
            matches: block.matches().to_vec(),
        }
    }
}

/// Matches OCR text against a sensitive-data list
#[derive(Debug, Clone)]
pub struct Matcher {
    sensitive: SensitiveData,
    max_distance: Option<usize>,
}

impl Matcher {
    pub fn new(sensitive: SensitiveData) -> Self {
        Self {
            sensitive,
            max_distance: None,
        }
    }

    /// Use a fixed edit-distance threshold for every literal instead of the
    /// length-adaptive default
    pub fn with_max_distance(mut self, max_distance: Option<usize>) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn sensitive_data(&self) -> &SensitiveData {
        &self.sensitive
    }

    pub fn threshold(&self, literal: &str) -> usize {
        threshold(literal, self.max_distance)
    }

    pub fn match_text(&self, text: &str) -> MatchResult {
        find_matches(self.sensitive.iter(), text, self.max_distance)
    }

    /// Match a block and append the result to its recorded matches.
    /// Returns whether the block is sensitive afterwards.
    pub fn tag_block(&self, block: &mut OcrBlock) -> bool {
        let result = self.match_text(&block.text);
        block.match_result.merge(result);
        block.is_sensitive()
    }

    /// Tag every block, returning the number of sensitive blocks
    pub fn tag_blocks(&self, blocks: &mut [OcrBlock]) -> usize {
        blocks
            .iter_mut()
            .map(|block| self.tag_block(block))
            .filter(|sensitive| *sensitive)
            .count()
    }
}

/// Edit-distance tolerance for a literal: the explicit maximum when given,
/// otherwise one edit per started group of eight characters
pub fn threshold(literal: &str, max_distance: Option<usize>) -> usize {
    max_distance.unwrap_or_else(|| literal.chars().count().div_ceil(8))
}

/// Words of `text` within `max_distance` edits of `literal`, in text order
pub fn fuzzy_words<'a>(literal: &str, text: &'a str, max_distance: usize) -> Vec<&'a str> {
    text.split_whitespace()
        .filter(|word| levenshtein(literal, word) <= max_distance)
        .collect()
}

/// Match every literal against `text`.
///
/// A literal found verbatim is recorded as itself. Otherwise each word within
/// the literal's threshold is recorded as the word seen in the text.
pub fn find_matches<'a>(
    sensitive: impl IntoIterator<Item = &'a str>,
    text: &str,
    max_distance: Option<usize>,
) -> MatchResult {
    let mut result = MatchResult::default();

    for literal in sensitive {
        if literal.is_empty() {
            continue;
        }

        if text.contains(literal) {
            tracing::debug!("Found sensitive data in line: {}", text);
            result.push(literal);
            continue;
        }

        let limit = threshold(literal, max_distance);
        for word in fuzzy_words(literal, text, limit) {
            tracing::debug!("Found potentially sensitive data: {}", word);
            result.push(word);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(literals: &[&str]) -> Matcher {
        Matcher::new(SensitiveData::new(
            literals.iter().map(|s| s.to_string()).collect(),
        ))
    }

    #[test]
    fn test_threshold_adaptive() {
        assert_eq!(threshold("password123", None), 2);
        assert_eq!(threshold("abcdefgh", None), 1);
        assert_eq!(threshold("abcdefghi", None), 2);
        assert_eq!(threshold("jdoe@example.com", None), 2);
        assert_eq!(threshold("", None), 0);
    }

    #[test]
    fn test_threshold_explicit_overrides() {
        assert_eq!(threshold("password123", Some(0)), 0);
        assert_eq!(threshold("ab", Some(4)), 4);
    }

    #[test]
    fn test_exact_match_ignores_max_distance() {
        let m = matcher(&["jdoe@example.com"]).with_max_distance(Some(0));
        let result = m.match_text("jdoe@example.com");

        assert!(result.is_sensitive);
        assert_eq!(result.matches, vec!["jdoe@example.com"]);
    }

    #[test]
    fn test_exact_substring_records_literal() {
        let m = matcher(&["jdoe"]);
        let result = m.match_text("user=jdoe;");
        assert_eq!(result.matches, vec!["jdoe"]);
    }

    #[test]
    fn test_fuzzy_records_word() {
        let m = matcher(&["jdoe@example.com"]);
        let result = m.match_text("jdoe@exannple.com");

        assert!(result.is_sensitive);
        assert_eq!(result.matches, vec!["jdoe@exannple.com"]);
    }

    #[test]
    fn test_threshold_boundary() {
        // 8 chars -> threshold 1
        let m = matcher(&["abcdefgh"]);
        assert_eq!(m.match_text("abcdefgX").matches, vec!["abcdefgX"]);
        assert!(!m.match_text("abcdefXY").is_sensitive);
    }

    #[test]
    fn test_fuzzy_checks_each_word() {
        let m = matcher(&["hunter22"]);
        let result = m.match_text("pw: hunter23 and hunter2");
        assert_eq!(result.matches, vec!["hunter23", "hunter2"]);
    }

    #[test]
    fn test_exact_hit_skips_fuzzy_for_that_literal() {
        let m = matcher(&["secret"]);
        let result = m.match_text("mysecret secrat");
        assert_eq!(result.matches, vec!["secret"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let m = matcher(&["secret", "secret"]);
        let result = m.match_text("secret");
        assert_eq!(result.matches, vec!["secret", "secret"]);
    }

    #[test]
    fn test_case_sensitive() {
        let strict = matcher(&["Secret"]).with_max_distance(Some(0));
        assert!(!strict.match_text("secret").is_sensitive);

        // Case difference counts as one edit
        let tolerant = matcher(&["Secret"]);
        assert_eq!(tolerant.match_text("secret").matches, vec!["secret"]);
    }

    #[test]
    fn test_empty_text() {
        let m = matcher(&["secret"]);
        assert!(m.match_text("").is_empty());
        assert!(!m.match_text("").is_sensitive);
    }

    #[test]
    fn test_long_literal_still_compared() {
        // No early skip when the literal is much longer than the words
        let m = matcher(&["correct-horse-battery"]).with_max_distance(Some(21));
        let result = m.match_text("x yz");
        assert_eq!(result.matches, vec!["x", "yz"]);
    }

    #[test]
    fn test_tag_blocks() {
        let m = matcher(&["hunter2"]);
        let mut blocks = vec![
            OcrBlock::new("login", 0, 0, 50, 10),
            OcrBlock::new("hunter2", 60, 0, 70, 10),
            OcrBlock::new("", 0, 20, 0, 0),
        ];

        let count = m.tag_blocks(&mut blocks);

        assert_eq!(count, 1);
        assert!(!blocks[0].is_sensitive());
        assert!(blocks[1].is_sensitive());
        assert_eq!(blocks[1].matches(), ["hunter2"]);
    }

    #[test]
    fn test_summary_from_block() {
        let mut block = OcrBlock::new("hunter2", 5, 6, 70, 10);
        block.match_result.push("hunter2");

        let summary = MatchSummary::from(&block);
        assert_eq!(summary.text, "hunter2");
        assert_eq!(summary.left, 5);
        assert_eq!(summary.matches, vec!["hunter2"]);
    }
}
