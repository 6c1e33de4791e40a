//! Image layer for sanipass
//!
//! This crate provides:
//! - The `Surface` capability (open, draw rectangle, save) and its raster backend
//! - The two-layer redaction applicator
//! - `RedactedImage`, the aggregate owning an image's pixels and OCR blocks

pub mod document;
pub mod error;
pub mod redact;
pub mod surface;

pub use document::RedactedImage;
pub use error::{ImageError, Result};
pub use redact::{RedactionStyle, redact_block};
pub use surface::{PixelRect, RasterSurface, Surface};
