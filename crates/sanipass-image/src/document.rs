//! Image aggregate: pixels plus the OCR blocks recognized on them

use std::path::{Path, PathBuf};

use sanipass_core::OcrBlock;

use crate::redact::{RedactionStyle, redact_block};
use crate::{ImageError, RasterSurface, Result, Surface};

/// A decoded image together with its OCR blocks.
///
/// Owns its pixel buffer and block list exclusively. Blocks are appended once
/// after OCR, tagged by the matcher, then redaction mutates the pixels in
/// place until `save` persists them.
#[derive(Debug)]
pub struct RedactedImage<S: Surface = RasterSurface> {
    path: PathBuf,
    surface: S,
    blocks: Vec<OcrBlock>,
}

impl<S: Surface> RedactedImage<S> {
    /// Decode the image at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let surface = S::open(path)?;
        Ok(Self::with_surface(path, surface))
    }

    pub fn with_surface(path: impl AsRef<Path>, surface: S) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            surface,
            blocks: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn blocks(&self) -> &[OcrBlock] {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> &mut [OcrBlock] {
        &mut self.blocks
    }

    pub fn add_blocks(&mut self, blocks: impl IntoIterator<Item = OcrBlock>) {
        self.blocks.extend(blocks);
    }

    pub fn sensitive_blocks(&self) -> Vec<&OcrBlock> {
        self.blocks.iter().filter(|b| b.is_sensitive()).collect()
    }

    pub fn has_sensitive_data(&self) -> bool {
        self.blocks.iter().any(OcrBlock::is_sensitive)
    }

    /// Redact every sensitive block. Matching must already have run.
    /// Returns the number of fill layers drawn.
    pub fn redact_all(&mut self, style: &RedactionStyle) -> usize {
        let mut filled = 0;
        for block in self.blocks.iter().filter(|b| b.is_sensitive()) {
            filled += redact_block(&mut self.surface, block, style);
        }

        tracing::debug!("Drew {} redactions on {}", filled, self.path.display());
        filled
    }

    /// Write the pixels to `path` (defaults to the source path).
    ///
    /// Fails with `AlreadyExists` when the target exists and `overwrite` is
    /// false. Write failures are returned unchanged.
    pub fn save(&self, path: Option<&Path>, overwrite: bool) -> Result<PathBuf> {
        let target = path.unwrap_or(self.path.as_path());

        if !overwrite && target.exists() {
            return Err(ImageError::AlreadyExists(target.to_path_buf()));
        }

        self.surface.save(target)?;
        tracing::info!("Saved {}", target.display());
        Ok(target.to_path_buf())
    }
}
