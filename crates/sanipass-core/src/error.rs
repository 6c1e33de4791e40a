use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
