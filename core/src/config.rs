//! config.rs
//! Encoder configuration.
//!
//! Notes:
//! - Defaults mirror `constants.rs`.
//! - Loaded from JSON; unknown fields are rejected so typos fail loudly.
//! - `validate()` runs on every load and before a stream codec is built.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_BLOCK_SIZE, DEFAULT_LEVEL, MAX_BLOCK_SIZE, MAX_LEVEL, MIN_LEVEL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FastLogConfig {
    /// LZ4 HC level for the primary compressor.
    pub level: i32,
    /// Uncompressed bytes per container block.
    pub block_size: usize,
}

impl Default for FastLogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl FastLogConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&self.level) {
            return Err(ConfigError::LevelOutOfRange {
                have: self.level,
                min: MIN_LEVEL,
                max: MAX_LEVEL,
            });
        }
        if self.block_size == 0 {
            return Err(ConfigError::BlockSizeZero);
        }
        if self.block_size > MAX_BLOCK_SIZE {
            return Err(ConfigError::BlockSizeTooLarge {
                have: self.block_size,
                max: MAX_BLOCK_SIZE,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("level {have} outside {min}..={max}")]
    LevelOutOfRange { have: i32, min: i32, max: i32 },

    #[error("block_size must be non-zero")]
    BlockSizeZero,

    #[error("block_size {have} > {max}")]
    BlockSizeTooLarge { have: usize, max: usize },

    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}
