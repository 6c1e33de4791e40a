use async_trait::async_trait;
use sanipass_core::OcrBlock;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::{OcrError, OcrProvider, Result, preprocess, tsv::parse_tsv};

/// Tesseract invocation settings
#[derive(Debug, Clone)]
pub struct TesseractOptions {
    /// Explicit executable; looked up on PATH when unset
    pub executable: Option<PathBuf>,
    /// Page segmentation mode (6 = single uniform block of text)
    pub psm: u8,
    pub language: String,
    pub preserve_interword_spaces: bool,
    pub char_whitelist: Option<String>,
    /// Word list that biases recognition toward known strings
    pub user_words: Option<PathBuf>,
    pub user_patterns: Option<PathBuf>,
    /// Blocks below this confidence are dropped
    pub min_confidence: Option<f32>,
    /// Convert to grayscale before OCR
    pub preprocess: bool,
    /// Keep the grayscale image next to the source
    pub save_preprocessed: bool,
}

impl Default for TesseractOptions {
    fn default() -> Self {
        Self {
            executable: None,
            psm: 6,
            language: "eng".to_string(),
            preserve_interword_spaces: true,
            char_whitelist: None,
            user_words: None,
            user_patterns: None,
            min_confidence: None,
            preprocess: false,
            save_preprocessed: false,
        }
    }
}

/// OCR provider backed by the `tesseract` executable
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    executable: PathBuf,
    options: TesseractOptions,
}

impl TesseractOcr {
    pub fn new(options: TesseractOptions) -> Result<Self> {
        let executable = match &options.executable {
            Some(path) => path.clone(),
            None => which::which("tesseract")
                .map_err(|_| OcrError::ExecutableNotFound("tesseract".to_string()))?,
        };

        tracing::debug!("Tesseract executable: {}", executable.display());
        Ok(Self {
            executable,
            options,
        })
    }

    pub fn options(&self) -> &TesseractOptions {
        &self.options
    }

    /// Arguments for one run writing TSV to stdout
    pub fn command_args(&self, image: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![image.into(), "stdout".into()];

        args.push("-l".into());
        args.push(self.options.language.clone().into());
        args.push("--psm".into());
        args.push(self.options.psm.to_string().into());

        if let Some(words) = &self.options.user_words {
            args.push("--user-words".into());
            args.push(words.into());
        }
        if let Some(patterns) = &self.options.user_patterns {
            args.push("--user-patterns".into());
            args.push(patterns.into());
        }

        if self.options.preserve_interword_spaces {
            args.push("-c".into());
            args.push("preserve_interword_spaces=1".into());
        }
        if let Some(whitelist) = self.options.char_whitelist.as_deref()
            && !whitelist.is_empty()
        {
            args.push("-c".into());
            args.push(format!("tessedit_char_whitelist={}", whitelist).into());
        }

        args.push("tsv".into());
        args
    }
}

#[async_trait]
impl OcrProvider for TesseractOcr {
    async fn recognize(&self, image: &Path) -> Result<Vec<OcrBlock>> {
        tracing::info!("Processing {}", image.display());

        let prepared = if self.options.preprocess {
            Some(preprocess::grayscale(image, self.options.save_preprocessed).await?)
        } else {
            None
        };
        let input = prepared.as_ref().map_or(image, |temp| temp.path());

        let args = self.command_args(input);
        tracing::debug!("Tesseract args: {:?}", args);

        let output = Command::new(&self.executable).args(&args).output().await?;

        if !output.status.success() {
            return Err(OcrError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let mut blocks = parse_tsv(&String::from_utf8_lossy(&output.stdout));

        if let Some(min) = self.options.min_confidence {
            blocks.retain(|block| block.confidence >= min);
        }

        tracing::debug!("Tesseract returned {} blocks", blocks.len());
        Ok(blocks)
    }

    fn name(&self) -> &str {
        "tesseract"
    }
}
