//! Core domain models and logic for sanipass
//!
//! This crate contains:
//! - Domain models (OcrBlock, MatchResult, RedactionRegion, SensitiveData)
//! - Bounding-box calculation for matched substrings
//! - Output file naming conventions

pub mod block;
pub mod color;
pub mod error;
pub mod naming;
pub mod region;
pub mod sensitive;

pub use block::{MatchResult, OcrBlock};
pub use color::Color;
pub use error::{Error, Result};
pub use naming::{intermediate_path, sanitized_path};
pub use region::{RedactionRegion, compute_region};
pub use sensitive::SensitiveData;
