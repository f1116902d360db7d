use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsdeskError {
    #[error("Cannot open source {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Array store is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, NewsdeskError>;
