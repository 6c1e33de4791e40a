use sanipass_core::{Error, Result};
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

/// Suffixes of files written by sanipass itself
const OUTPUT_SUFFIXES: &[&str] = &["-sanitized", "-preprocessed"];

/// Where to find the images to process
#[derive(Debug, Clone, Default)]
pub struct InputOptions {
    /// Image file, directory, or glob pattern
    pub input: Option<PathBuf>,
    /// File with one image path per line
    pub input_file: Option<PathBuf>,
    /// Descend into subdirectories of a directory input
    pub recursive: bool,
}

/// Collect the image paths named by `options`, in a stable order
pub fn collect_inputs(options: &InputOptions) -> Result<Vec<PathBuf>> {
    if options.input.is_none() && options.input_file.is_none() {
        return Err(Error::InvalidInput(
            "Either --input or --input-file must be specified".to_string(),
        ));
    }

    let mut images = Vec::new();

    if let Some(input) = &options.input {
        if input.is_dir() {
            images.extend(expand_dir(input, options.recursive)?);
        } else if input.is_file() {
            // Explicit files are taken as-is, whatever their extension
            images.push(input.clone());
        } else if is_glob(input) {
            images.extend(expand_glob(&input.to_string_lossy())?);
        } else {
            return Err(Error::InvalidInput(format!(
                "Input does not exist: {}",
                input.display()
            )));
        }
    }

    if let Some(list) = &options.input_file {
        images.extend(read_list(list)?);
    }

    tracing::debug!("Collected {} input images", images.len());
    Ok(images)
}

/// Images inside a directory, skipping files sanipass produced
pub fn expand_dir(path: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if recursive {
        for entry in walkdir::WalkDir::new(path) {
            let entry = entry.map_err(|e| Error::Other(e.into()))?;
            if entry.file_type().is_file() && is_candidate(entry.path()) {
                files.push(entry.into_path());
            }
        }
    } else {
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_file() && is_candidate(&path) {
                files.push(path);
            }
        }
    }

    // Sort for determinism
    files.sort();

    Ok(files)
}

/// Files matching a glob pattern
pub fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in glob::glob(pattern).map_err(|e| Error::Other(e.into()))? {
        let path = entry.map_err(|e| Error::Other(e.into()))?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();

    Ok(files)
}

/// Paths listed one per line; blank lines are skipped
pub fn read_list(path: &Path) -> Result<Vec<PathBuf>> {
    let content = std::fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

fn is_glob(path: &Path) -> bool {
    let s = path.to_string_lossy();
    s.contains('*') || s.contains('?') || s.contains('[')
}

fn is_candidate(path: &Path) -> bool {
    if !is_image(path) {
        return false;
    }
    if is_output(path) {
        tracing::debug!("Skipping sanipass output {}", path.display());
        return false;
    }
    true
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.iter().any(|ext| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

fn is_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|stem| OUTPUT_SUFFIXES.iter().any(|suffix| stem.ends_with(suffix)))
        .unwrap_or(false)
}
