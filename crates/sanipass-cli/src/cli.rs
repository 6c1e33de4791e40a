use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sanipass")]
#[command(about = "Redact sensitive data from screenshots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file (default: platform config directory)
    #[arg(long, global = true, env = "SANIPASS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find sensitive data and write redacted copies
    Redact(RedactArgs),

    /// Report images containing sensitive data without modifying anything
    Scan(ScanArgs),

    /// Write a default config file
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
pub struct InputArgs {
    /// Sensitive data to sanitize from screenshots, one literal per line
    #[arg(short = 's', long = "sensitive-data")]
    pub sensitive_data: PathBuf,

    /// Image, directory of images, or glob pattern to process
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// File with line-separated list of image files to process
    #[arg(long)]
    pub input_file: Option<PathBuf>,

    /// Maximum Levenshtein distance between a sensitive literal and a detected word
    #[arg(short = 'm', long)]
    pub max_distance: Option<usize>,

    /// Descend into subdirectories of a directory input
    #[arg(long)]
    pub recursive: bool,

    /// Images processed concurrently (default from config: 4)
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,
}

#[derive(Args)]
pub struct RedactArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Do not modify files, only report files with sensitive data
    #[arg(short = 'r', long)]
    pub report_only: bool,

    /// Keep the first N characters of each match visible
    #[arg(long)]
    pub keep_first: Option<usize>,

    /// Keep the last N characters of each match visible
    #[arg(long)]
    pub keep_last: Option<usize>,

    /// Overwrite existing sanitized images
    #[arg(long)]
    pub overwrite: bool,
}

#[derive(Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print matches as JSON
    #[arg(long)]
    pub json: bool,
}
