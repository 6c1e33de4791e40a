//! Bounding-box calculation for matched substrings
//!
//! OCR providers report one box per word. A match can cover only part of that
//! word (e.g. `user=jdoe` where only `jdoe` is sensitive), so the redaction
//! rectangle is derived by slicing the block box with a uniform glyph width.

use serde::{Deserialize, Serialize};

use crate::OcrBlock;

/// Pixel rectangle targeted for destructive overwrite.
///
/// Coordinates are fractional; the image surface decides how to round them.
/// `left <= right` and `top <= bottom` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RedactionRegion {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RedactionRegion {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: right.max(left),
            bottom: bottom.max(top),
        }
    }

    /// Full box of an OCR block
    pub fn of_block(block: &OcrBlock) -> Self {
        let left = f64::from(block.left);
        let top = f64::from(block.top);
        Self::new(
            left,
            top,
            left + f64::from(block.width),
            top + f64::from(block.height),
        )
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// True when the region covers no horizontal or vertical extent
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Grow the region outward by `amount` pixels on every side
    pub fn inflate(&self, amount: f64) -> Self {
        Self::new(
            self.left - amount,
            self.top - amount,
            self.right + amount,
            self.bottom + amount,
        )
    }
}

/// Compute the rectangle covering `matched` inside `block`, leaving
/// `keep_first` leading and `keep_last` trailing characters visible.
///
/// A match that is not found verbatim in the block text (fuzzy hits can drift
/// from the stored text) covers the whole block text. When the preserved
/// characters exceed the span the region collapses to zero width at its left
/// edge instead of inverting.
pub fn compute_region(
    block: &OcrBlock,
    matched: &str,
    keep_first: usize,
    keep_last: usize,
) -> RedactionRegion {
    let character_width = block.character_width();
    let block_left = f64::from(block.left);

    let (span_left, span_right) = if matched == block.text {
        (block_left, block_left + f64::from(block.width))
    } else {
        let (start, len) = match block.text.find(matched) {
            Some(byte_index) => (
                block.text[..byte_index].chars().count(),
                matched.chars().count(),
            ),
            None => {
                tracing::debug!(
                    "Match {:?} not found in block text {:?}, using whole block",
                    matched,
                    block.text
                );
                (0, block.char_count())
            }
        };

        let word_left = block_left + start as f64 * character_width;
        (word_left, word_left + len as f64 * character_width)
    };

    let left = span_left + keep_first as f64 * character_width;
    let right = span_right - keep_last as f64 * character_width;

    let top = f64::from(block.top);
    let bottom = top + f64::from(block.height);

    if left > right {
        return RedactionRegion::new(left, top, left, bottom);
    }

    RedactionRegion::new(left, top, right, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_text_uses_block_box() {
        let block = OcrBlock::new("jdoe@example.com", 10, 5, 170, 15);
        let region = compute_region(&block, "jdoe@example.com", 0, 0);

        assert_eq!(region, RedactionRegion::new(10.0, 5.0, 180.0, 20.0));
        assert_eq!(region, RedactionRegion::of_block(&block));
    }

    #[test]
    fn test_substring_region() {
        // 10px per character
        let block = OcrBlock::new("user=jdoe;", 100, 50, 100, 20);
        let region = compute_region(&block, "jdoe", 0, 0);

        assert_eq!(region.left, 150.0);
        assert_eq!(region.right, 190.0);
        assert_eq!(region.top, 50.0);
        assert_eq!(region.bottom, 70.0);
    }

    #[test]
    fn test_keep_first_and_last() {
        let block = OcrBlock::new("id:0123456789", 0, 0, 130, 10);
        let region = compute_region(&block, "0123456789", 2, 2);

        let character_width = block.character_width();
        assert_eq!(region.width(), 6.0 * character_width);
        assert_eq!(region.left, 5.0 * character_width);
        assert_eq!(region.right, 11.0 * character_width);
    }

    #[test]
    fn test_keep_applies_to_full_block_match() {
        let block = OcrBlock::new("abcdefgh", 0, 0, 80, 10);
        let region = compute_region(&block, "abcdefgh", 1, 3);

        assert_eq!(region.left, 10.0);
        assert_eq!(region.right, 50.0);
    }

    #[test]
    fn test_missing_match_falls_back_to_whole_text() {
        let block = OcrBlock::new("hunter2", 20, 0, 70, 10);
        let region = compute_region(&block, "hunt3r2", 0, 0);

        assert_eq!(region.left, 20.0);
        assert_eq!(region.right, 90.0);
    }

    #[test]
    fn test_overlapping_keep_is_clamped() {
        let block = OcrBlock::new("abcd", 0, 0, 40, 10);
        let region = compute_region(&block, "abcd", 3, 3);

        assert!(region.left <= region.right);
        assert!(region.is_empty());
        assert_eq!(region.left, 30.0);
    }

    #[test]
    fn test_multibyte_offsets() {
        let block = OcrBlock::new("ñame:secret", 0, 0, 110, 10);
        let region = compute_region(&block, "secret", 0, 0);

        assert_eq!(region.left, 50.0);
        assert_eq!(region.right, 110.0);
    }

    #[test]
    fn test_inflate() {
        let region = RedactionRegion::new(10.0, 10.0, 20.0, 20.0).inflate(2.0);
        assert_eq!(region, RedactionRegion::new(8.0, 8.0, 22.0, 22.0));
    }
}
