//! Error types for sanipass-image

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImageError>;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
