//! Output file naming

use std::path::{Path, PathBuf};

/// Path of the redacted copy: `shot.png` -> `shot-sanitized.png`
pub fn sanitized_path(path: &Path) -> PathBuf {
    intermediate_path(path, "sanitized")
}

/// Path for an intermediate pipeline artifact: `shot.png` -> `shot-<step>.png`
pub fn intermediate_path(path: &Path, step: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match path.extension() {
        Some(ext) => format!("{}-{}.{}", stem, step, ext.to_string_lossy()),
        None => format!("{}-{}", stem, step),
    };

    path.with_file_name(file_name)
}
