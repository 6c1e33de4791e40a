//! Sensitive-data matching for OCR text
//!
//! A block is sensitive when a literal from the sensitive-data list appears in
//! its text verbatim, or when one of its whitespace-separated words is within
//! an edit-distance threshold of a literal (OCR noise tolerance).

pub mod distance;
pub mod matcher;

pub use distance::levenshtein;
pub use matcher::{MatchSummary, Matcher, find_matches, fuzzy_words, threshold};
