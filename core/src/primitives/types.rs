//! primitives/types.rs
//! Capability traits and the primitive-level error.

use thiserror::Error;

/// Failure reported by a single primitive call.
///
/// The codec treats every variant the same way; the detail only travels into
/// logs and the final error message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    /// A compressor reported zero bytes written.
    #[error("{codec} produced no output")]
    NoOutput { codec: &'static str },

    /// A primitive claimed to write more bytes than the destination holds.
    #[error("{codec} reported {written} bytes written into a {capacity}-byte buffer")]
    Overrun { codec: &'static str, written: usize, capacity: usize },

    /// Destination capacity cannot be expressed to the backend.
    #[error("{codec} cannot address a {capacity}-byte buffer")]
    CapacityTooLarge { codec: &'static str, capacity: usize },

    /// The backend rejected the call (malformed stream, buffer too small, ...).
    #[error("{codec} failed: {msg}")]
    Failed { codec: &'static str, msg: String },
}

/// High-ratio, level-tunable compressor. Attempted first; may fail.
pub trait PrimaryCompressor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Compress `input` into `dst` at `level`, returning the bytes written.
    fn compress(&self, input: &[u8], level: i32, dst: &mut [u8]) -> Result<usize, PrimitiveError>;
}

/// Fast, non-tunable compressor used only after the primary fails.
pub trait FallbackCompressor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Compress `input` into `dst`, returning the bytes written.
    fn compress(&self, input: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError>;
}

/// Restores original bytes into a caller-sized buffer.
///
/// Must fail rather than write past `dst.len()` when the stream would
/// overflow the capacity or is malformed.
pub trait BoundedDecompressor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Decompress `input` into `dst`, returning the original length.
    fn decompress(&self, input: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError>;
}
