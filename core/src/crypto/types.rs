//! crypto/types.rs
//! Envelope error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    /// Invalid key length provided to the cipher.
    #[error("invalid key length: expected={expected}, actual={actual}")]
    InvalidKeyLen { expected: usize, actual: usize },

    /// Nonce length mismatch (must be 12 bytes).
    #[error("invalid nonce length: expected={expected}, actual={actual}")]
    InvalidNonceLen { expected: usize, actual: usize },

    /// Hex key material could not be parsed.
    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(#[from] hex::FromHexError),

    /// Envelope shorter than nonce + tag.
    #[error("envelope too short: {have} < {need}")]
    Truncated { have: usize, need: usize },

    /// AEAD tag mismatch (authentication failure).
    #[error("AEAD tag mismatch")]
    TagMismatch,

    /// Encryption failed inside the cipher.
    #[error("crypto failure: {0}")]
    Failure(String),
}
