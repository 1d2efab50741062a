//! types.rs
//! Crate-wide error type.

use std::io;

use thiserror::Error;

use crate::{config::ConfigError, container::ContainerError, crypto::CryptoError, hybrid::HybridError};

/// Unified error covering codec, container, envelope, configuration and I/O.
/// - `From<T>` impls enable `?` across layers.
/// - Messages stay stable and contextual for logs.
#[derive(Debug, Error)]
pub enum FastLogError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Hybrid codec error (both compressors failed, decompression failed, ...).
    #[error("codec error: {0}")]
    Codec(#[from] HybridError),

    /// Container-level error (validation, parse, or a failing block).
    #[error("container error: {0}")]
    Container(#[from] ContainerError),

    /// Envelope encryption error.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Generic validation with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
