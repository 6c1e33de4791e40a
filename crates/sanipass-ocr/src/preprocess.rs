//! Optional image preprocessing before OCR

use sanipass_core::intermediate_path;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Convert the image to grayscale into a temporary PNG for OCR.
///
/// With `save_copy`, the grayscale image is also written next to the source
/// as `<stem>-preprocessed.<ext>`. The temp file is removed when dropped.
pub async fn grayscale(path: &Path, save_copy: bool) -> crate::Result<NamedTempFile> {
    let path: PathBuf = path.to_path_buf();

    tokio::task::spawn_blocking(move || -> crate::Result<NamedTempFile> {
        let gray = image::open(&path)?.to_luma8();

        let temp = NamedTempFile::with_suffix(".png")?;
        gray.save(temp.path())?;

        if save_copy {
            let copy = intermediate_path(&path, "preprocessed");
            gray.save(&copy)?;
            tracing::info!("Saved preprocessed image {}", copy.display());
        }

        Ok(temp)
    })
    .await?
}
