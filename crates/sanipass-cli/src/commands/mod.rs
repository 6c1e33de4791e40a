pub mod init;
pub mod redact;
pub mod scan;

use anyhow::{Context, Result};
use sanipass_config::Config;
use sanipass_core::{Color, SensitiveData};
use sanipass_engine::Sanitizer;
use sanipass_image::RedactionStyle;
use sanipass_ocr::{TesseractOcr, TesseractOptions};
use sanipass_security::Matcher;
use sanipass_sources::{InputOptions, collect_inputs};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::InputArgs;

/// Explicit config file, or the platform default (created on first use)
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Config::load(),
    }
}

/// Build the sanitizer and the list of images to process
pub fn prepare(args: &InputArgs, config: &Config) -> Result<(Sanitizer, Vec<PathBuf>)> {
    let inputs = collect_inputs(&InputOptions {
        input: args.input.clone(),
        input_file: args.input_file.clone(),
        recursive: args.recursive || config.engine.recursive,
    })?;

    let sensitive = SensitiveData::load(&args.sensitive_data).with_context(|| {
        format!(
            "Failed to read sensitive data {}",
            args.sensitive_data.display()
        )
    })?;

    let matcher =
        Matcher::new(sensitive).with_max_distance(args.max_distance.or(config.matching.max_distance));

    let ocr = TesseractOcr::new(ocr_options(config, &args.sensitive_data))?;

    let sanitizer =
        Sanitizer::new(Arc::new(ocr), matcher).with_jobs(args.jobs.unwrap_or(config.engine.jobs));

    Ok((sanitizer, inputs))
}

fn ocr_options(config: &Config, sensitive_data: &Path) -> TesseractOptions {
    let bias = config
        .ocr
        .bias_to_sensitive_data
        .then(|| sensitive_data.to_path_buf());

    TesseractOptions {
        executable: config.ocr.tesseract.clone(),
        psm: config.ocr.psm,
        language: config.ocr.language.clone(),
        preserve_interword_spaces: config.ocr.preserve_interword_spaces,
        char_whitelist: config.ocr.char_whitelist.clone(),
        user_words: bias.clone(),
        user_patterns: bias,
        min_confidence: config.ocr.min_confidence,
        preprocess: config.ocr.preprocess,
        save_preprocessed: config.ocr.save_preprocessed,
    }
}

/// Redaction style from config, with flag overrides for the preserved characters
pub fn redaction_style(
    config: &Config,
    keep_first: Option<usize>,
    keep_last: Option<usize>,
) -> Result<RedactionStyle> {
    let redaction = &config.redaction;

    let outline_color: Color = redaction
        .outline_color
        .parse()
        .context("Invalid redaction.outline_color")?;
    let fill_color: Color = redaction
        .fill_color
        .parse()
        .context("Invalid redaction.fill_color")?;

    Ok(RedactionStyle {
        keep_first: keep_first.unwrap_or(redaction.keep_first),
        keep_last: keep_last.unwrap_or(redaction.keep_last),
        outline_color,
        fill_color,
        border_width: redaction.border_width,
        border_padding: redaction.border_padding,
    })
}
