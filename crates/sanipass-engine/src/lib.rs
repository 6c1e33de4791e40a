//! Screenshot sanitization pipeline
//!
//! Opens each image, runs OCR, tags sensitive blocks with the matcher and,
//! when asked, redacts and writes `<stem>-sanitized.<ext>` next to the source.

use anyhow::{Context, Result};
use futures_util::{StreamExt, stream};
use sanipass_core::sanitized_path;
use sanipass_image::{RasterSurface, RedactedImage, RedactionStyle};
use sanipass_ocr::OcrProvider;
use sanipass_security::{MatchSummary, Matcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Result of scanning one input, in input order
pub type ScanEntry = (PathBuf, Result<Option<RedactedImage>>);

/// Result of sanitizing one input, in input order
pub type SanitizeEntry = (PathBuf, Result<Outcome>);

/// What happened to one image
#[derive(Debug)]
pub enum Outcome {
    Clean,
    Sensitive {
        matches: Vec<MatchSummary>,
        /// Sanitized copy, absent when only reporting
        saved: Option<PathBuf>,
    },
}

pub struct Sanitizer {
    ocr: Arc<dyn OcrProvider>,
    matcher: Arc<Matcher>,
    jobs: usize,
}

impl Sanitizer {
    pub fn new(ocr: Arc<dyn OcrProvider>, matcher: Matcher) -> Self {
        if matcher.sensitive_data().is_empty() {
            tracing::warn!("Sensitive data list is empty; nothing will be redacted");
        }

        Self {
            ocr,
            matcher: Arc::new(matcher),
            jobs: 1,
        }
    }

    /// Number of images processed concurrently (at least one)
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Scan one image. Returns the tagged image when it holds sensitive data.
    pub async fn scan(&self, path: &Path) -> Result<Option<RedactedImage>> {
        let owned = path.to_path_buf();
        let mut image = tokio::task::spawn_blocking(move || {
            RedactedImage::<RasterSurface>::open(&owned)
        })
        .await?
        .with_context(|| format!("Failed to open {}", path.display()))?;

        let blocks = self
            .ocr
            .recognize(path)
            .await
            .with_context(|| format!("{} failed on {}", self.ocr.name(), path.display()))?;
        tracing::info!("Found {} OCR blocks in {}", blocks.len(), path.display());

        image.add_blocks(blocks);
        let sensitive = self.matcher.tag_blocks(image.blocks_mut());

        if sensitive == 0 {
            tracing::info!("No sensitive data found in {}", path.display());
            return Ok(None);
        }

        tracing::info!(
            "Found {} sensitive OCR entries in {}",
            sensitive,
            path.display()
        );
        Ok(Some(image))
    }

    /// Scan many images, at most `jobs` at a time. Results keep input order
    /// and one failing image does not stop the others.
    pub async fn scan_all(&self, paths: &[PathBuf]) -> Vec<ScanEntry> {
        stream::iter(paths)
            .map(|path| async move { (path.clone(), self.scan(path).await) })
            .buffered(self.jobs)
            .collect()
            .await
    }

    /// Scan one image and, given a style, redact it and write the sanitized
    /// copy. Pixels are dropped before returning.
    pub async fn sanitize(
        &self,
        path: &Path,
        style: Option<&RedactionStyle>,
        overwrite: bool,
    ) -> Result<Outcome> {
        let Some(image) = self.scan(path).await? else {
            return Ok(Outcome::Clean);
        };

        let matches = image
            .sensitive_blocks()
            .into_iter()
            .map(MatchSummary::from)
            .collect();

        let saved = match style {
            Some(style) => Some(self.redact_and_save(image, style, overwrite).await?),
            None => None,
        };

        Ok(Outcome::Sensitive { matches, saved })
    }

    /// `sanitize` over many images, at most `jobs` at a time, so at most
    /// `jobs` decoded images are held at once. Results keep input order.
    pub async fn sanitize_all(
        &self,
        paths: &[PathBuf],
        style: Option<&RedactionStyle>,
        overwrite: bool,
    ) -> Vec<SanitizeEntry> {
        stream::iter(paths)
            .map(|path| async move { (path.clone(), self.sanitize(path, style, overwrite).await) })
            .buffered(self.jobs)
            .collect()
            .await
    }

    /// Redact every sensitive block and write the sanitized copy.
    ///
    /// Fails without writing when the sanitized file exists and `overwrite`
    /// is false.
    pub async fn redact_and_save(
        &self,
        mut image: RedactedImage,
        style: &RedactionStyle,
        overwrite: bool,
    ) -> Result<PathBuf> {
        let style = style.clone();

        tokio::task::spawn_blocking(move || {
            image.redact_all(&style);
            let target = sanitized_path(image.path());
            image
                .save(Some(&target), overwrite)
                .with_context(|| format!("Failed to save {}", target.display()))
        })
        .await?
    }
}
