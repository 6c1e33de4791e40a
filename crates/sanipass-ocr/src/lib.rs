//! OCR providers for sanipass
//!
//! The core only needs word text, pixel boxes and confidences. `OcrProvider`
//! abstracts where they come from; `TesseractOcr` runs the `tesseract`
//! executable and parses its TSV output.

pub mod error;
pub mod preprocess;
pub mod provider;
pub mod tesseract;
pub mod tsv;

pub use error::{OcrError, Result};
pub use provider::OcrProvider;
pub use tesseract::{TesseractOcr, TesseractOptions};
pub use tsv::parse_tsv;
