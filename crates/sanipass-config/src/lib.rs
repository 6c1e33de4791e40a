use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for sanipass (~/.config/sanipass/config.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub redaction: RedactionConfig,

    #[serde(default)]
    pub ocr: OcrConfig,

    #[serde(default)]
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Fixed edit-distance threshold; unset means ceil(len / 8) per literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    #[serde(default = "default_outline_color")]
    pub outline_color: String,

    #[serde(default = "default_fill_color")]
    pub fill_color: String,

    #[serde(default = "default_border_width")]
    pub border_width: u32,

    #[serde(default)]
    pub border_padding: u32,

    #[serde(default)]
    pub keep_first: usize,

    #[serde(default)]
    pub keep_last: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tesseract: Option<PathBuf>,

    #[serde(default = "default_psm")]
    pub psm: u8,

    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_true")]
    pub preserve_interword_spaces: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_whitelist: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f32>,

    /// Pass the sensitive-data file to tesseract as user words and patterns
    #[serde(default = "default_true")]
    pub bias_to_sensitive_data: bool,

    #[serde(default)]
    pub preprocess: bool,

    #[serde(default)]
    pub save_preprocessed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_jobs")]
    pub jobs: usize,

    #[serde(default)]
    pub recursive: bool,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            outline_color: default_outline_color(),
            fill_color: default_fill_color(),
            border_width: default_border_width(),
            border_padding: 0,
            keep_first: 0,
            keep_last: 0,
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract: None,
            psm: default_psm(),
            language: default_language(),
            preserve_interword_spaces: true,
            char_whitelist: None,
            min_confidence: None,
            bias_to_sensitive_data: true,
            preprocess: false,
            save_preprocessed: false,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            jobs: default_jobs(),
            recursive: false,
        }
    }
}

fn default_outline_color() -> String {
    "red".to_string()
}

fn default_fill_color() -> String {
    "black".to_string()
}

fn default_border_width() -> u32 {
    1
}

fn default_psm() -> u8 {
    6
}

fn default_language() -> String {
    "eng".to_string()
}

fn default_true() -> bool {
    true
}

fn default_jobs() -> usize {
    4
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Config::default();
            config.save(&path)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Write config as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "sanipass", "sanipass") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.sanipass/config.toml")
        }
    }
}
