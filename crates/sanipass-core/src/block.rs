//! OCR block domain model

use serde::{Deserialize, Serialize};

/// One word recognized by the OCR provider, in image pixel coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrBlock {
    pub text: String,
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
    pub confidence: f32,
    #[serde(default)]
    pub match_result: MatchResult,
}

impl OcrBlock {
    pub fn new(text: impl Into<String>, left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            text: text.into(),
            left,
            top,
            width,
            height,
            confidence: 0.0,
            match_result: MatchResult::default(),
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Number of characters in the block text (not bytes)
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Uniform glyph width approximation used for all sub-block geometry
    pub fn character_width(&self) -> f64 {
        f64::from(self.width) / self.char_count().max(1) as f64
    }

    pub fn is_sensitive(&self) -> bool {
        self.match_result.is_sensitive
    }

    pub fn matches(&self) -> &[String] {
        &self.match_result.matches
    }
}

/// Matches recorded against a block, in detection order.
///
/// Entries are never deduplicated: the same literal can be recorded more than
/// once and every entry is redacted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub is_sensitive: bool,
    pub matches: Vec<String>,
}

impl MatchResult {
    pub fn push(&mut self, matched: impl Into<String>) {
        self.is_sensitive = true;
        self.matches.push(matched.into());
    }

    /// Append all matches from another result, keeping order
    pub fn merge(&mut self, other: MatchResult) {
        self.is_sensitive |= other.is_sensitive;
        self.matches.extend(other.matches);
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
