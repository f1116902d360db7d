use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

const CONFIG_FILENAME: &str = "newsdesk.json";

pub const DEFAULT_CAPACITY: usize = 10_000;
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// Configuration for newsdesk, read from `newsdesk.json` in the working
/// directory when present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsdeskConfig {
    /// Cap on the number of articles the array store accepts.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Number of articles shown in the before/after-sort samples.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

impl Default for NewsdeskConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl NewsdeskConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}
