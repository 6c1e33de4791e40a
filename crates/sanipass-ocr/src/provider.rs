//! OCR provider trait

use async_trait::async_trait;
use sanipass_core::OcrBlock;
use std::path::Path;

/// Turns an image into recognized words with their pixel boxes
#[async_trait]
pub trait OcrProvider: Send + Sync {
    /// Recognize every word in the image at `image`
    async fn recognize(&self, image: &Path) -> crate::Result<Vec<OcrBlock>>;

    /// Short provider name for logs
    fn name(&self) -> &str;
}
