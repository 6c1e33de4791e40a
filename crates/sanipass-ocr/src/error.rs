//! Error types for sanipass-ocr

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OcrError>;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("OCR executable not found: {0}")]
    ExecutableNotFound(String),

    #[error("Tesseract failed ({status}): {stderr}")]
    Failed { status: String, stderr: String },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
